use axum::response::Response;
use std::error::Error;

pub mod http;

pub use http::HttpExceptionFilter;

/// The ExceptionFilter trait
///
/// Filters turn errors that escaped a handler or interceptor into a
/// response. They must always return a valid Response.
pub trait ExceptionFilter: Send + Sync + 'static {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response;
}
