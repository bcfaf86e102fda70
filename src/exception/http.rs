use crate::common::{ApiResponse, StatusCode};
use crate::error::AppError;
use crate::exception::ExceptionFilter;
use axum::response::{IntoResponse, Response};
use std::error::Error;

/// Default exception filter
///
/// Known error types keep their own status and body; anything else is a
/// 500 with a fixed message.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpExceptionFilter;

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response {
        let error = match error.downcast::<AppError>() {
            Ok(app_error) => return (*app_error).into_response(),
            Err(other) => other,
        };

        tracing::error!("Unhandled error: {}", error);
        ApiResponse::error(StatusCode::InternalServerError, "Internal Server Error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode as HttpStatusCode;

    #[test]
    fn test_app_error_keeps_status() {
        let response = HttpExceptionFilter.catch(Box::new(AppError::NotFound));
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_format_is_unprocessable() {
        let response = HttpExceptionFilter.catch(Box::new(AppError::invalid_format("eof")));
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unknown_error_is_internal() {
        let error = std::io::Error::other("disk on fire");
        let response = HttpExceptionFilter.catch(Box::new(error));
        assert_eq!(response.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    }
}
