use crate::di::Container;
use crate::error::{AppError, Result};
use crate::module::{AppState, Module};
use crate::modules::home::HomeModule;
use crate::modules::user::UserModule;
use axum::Router;

/// Root application module
///
/// Composes the home and user modules and answers everything they do not
/// route with the fixed 404 / 405 bodies.
pub struct AppModule;

impl Module for AppModule {
    fn register(container: &mut Container) -> Result<()> {
        HomeModule::register(container)?;
        UserModule::register(container)?;
        Ok(())
    }

    fn routes() -> Router<AppState> {
        Router::new()
            .merge(HomeModule::routes())
            .merge(UserModule::routes())
            .method_not_allowed_fallback(method_not_allowed)
            .fallback(not_found)
    }
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
