use crate::common::{ApiResponse, StatusCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every failure a request can end in.
///
/// The `Display` text is what gets logged. The client only ever sees
/// [`AppError::public_message`], which never includes parser internals.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request format: {reason}")]
    InvalidRequestFormat { reason: String },

    #[error("{0}")]
    Validation(String),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Payload Too Large")]
    PayloadTooLarge,

    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidRequestFormat {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequestFormat { .. } => StatusCode::UnprocessableEntity,
            AppError::Validation(_) => StatusCode::BadRequest,
            AppError::NotFound => StatusCode::NotFound,
            AppError::MethodNotAllowed => StatusCode::MethodNotAllowed,
            AppError::PayloadTooLarge => StatusCode::PayloadTooLarge,
            AppError::DependencyNotFound { .. } | AppError::Internal(_) => {
                StatusCode::InternalServerError
            }
        }
    }

    /// The message placed in the `error` field of the response body.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::InvalidRequestFormat { .. } => "Invalid request format",
            AppError::Validation(message) => message,
            AppError::NotFound => "Not Found",
            AppError::MethodNotAllowed => "Method Not Allowed",
            AppError::PayloadTooLarge => "Payload Too Large",
            AppError::DependencyNotFound { .. } | AppError::Internal(_) => {
                "Internal Server Error"
            }
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = %status, "{}", self);
        } else {
            tracing::debug!(code = %status, "{}", self);
        }
        ApiResponse::error(status, self.public_message()).into_response()
    }
}
