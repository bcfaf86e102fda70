//! # farm-stack-basic
//!
//! A small HTTP service with two routes:
//!
//! | Method | Path     | Outcome |
//! |--------|----------|---------|
//! | GET    | `/`      | 200 `{"message":"Hello World"}` |
//! | POST   | `/users` | 201 `{"message":"<name> is created successfully"}`, 400 for a blank name, 422 for a malformed body |
//! | any    | other    | 404 `{"error":"Not Found"}` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use farm_stack_basic::lifecycle::Application;
//! use farm_stack_basic::modules::AppModule;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Application::builder().build::<AppModule>()?.serve().await?;
//!     Ok(())
//! }
//! ```

pub mod common;
pub mod config;
pub mod di;
pub mod error;
pub mod exception;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod modules;
pub mod pipe;

// Re-export core types
pub use common::ApiResponse;
pub use error::{AppError, Result};
pub use module::{AppState, Module};

/// Prelude module for convenient imports
///
/// ```
/// use farm_stack_basic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::{ApiResponse, StatusCode};
    pub use crate::config::{ConfigService, Profile, ServerConfig};
    pub use crate::di::{Container, HasContainer, Inject};
    pub use crate::error::{AppError, Result};
    pub use crate::exception::{ExceptionFilter, HttpExceptionFilter};
    pub use crate::interceptor::{Interceptor, InterceptorResult, Next};
    pub use crate::lifecycle::{Application, ApplicationBuilder, LifecycleError, shutdown_signal};
    pub use crate::module::{AppState, Module};
    pub use crate::pipe::builtins::*;
    pub use crate::pipe::{Pipe, PipeError, PipeResult, ValidatedJson};
    pub use async_trait::async_trait;
    pub use axum::{Json, Router, response::IntoResponse};
    pub use std::sync::Arc;
}
