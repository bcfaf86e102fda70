use crate::error::Result;
use crate::modules::user::model::{CreateUserRequest, User};
use crate::pipe::Pipe;
use crate::pipe::builtins::NonBlankPipe;

pub const USER_NAME_REQUIRED: &str = "User name is required";

pub struct UserService {
    name_pipe: NonBlankPipe,
}

impl UserService {
    pub fn new() -> Self {
        Self {
            name_pipe: NonBlankPipe::new(USER_NAME_REQUIRED),
        }
    }

    /// Checks the name rule and hands back the user with the name exactly
    /// as supplied.
    pub async fn create(&self, req: CreateUserRequest) -> Result<User> {
        let name = self.name_pipe.transform(req.name).await?;
        tracing::debug!(name = %name, "User accepted");
        Ok(User { name })
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
