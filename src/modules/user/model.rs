use serde::{Deserialize, Serialize};

/// Body of `POST /users`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// A user that passed validation. Nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn created_message(&self) -> String {
        format!("{} is created successfully", self.name)
    }
}
