use crate::di::Container;
use crate::error::Result;
use crate::module::{AppState, Module};
use axum::{Router, routing::post};

pub mod controller;
pub mod model;
mod service;

pub use controller::create_user;
pub use model::{CreateUserRequest, User};
pub use service::{USER_NAME_REQUIRED, UserService};

pub struct UserModule;

impl Module for UserModule {
    fn register(container: &mut Container) -> Result<()> {
        container.register(UserService::new());
        Ok(())
    }

    fn routes() -> Router<AppState> {
        Router::new().route("/users", post(create_user))
    }
}
