use crate::common::StatusCode;
use axum::{
    Json,
    http::StatusCode as HttpStatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Standard API response body
///
/// Every endpoint answers with exactly one of two shapes:
/// `{"message": "..."}` on success or `{"error": "..."}` on failure.
/// The HTTP status travels alongside but is not serialized.
///
/// # Example
/// ```
/// use farm_stack_basic::common::{ApiResponse, StatusCode};
///
/// let created = ApiResponse::message(StatusCode::Created, "Ada is created successfully");
/// let missing = ApiResponse::error(StatusCode::NotFound, "Not Found");
/// assert_eq!(created.http_status.as_u16(), 201);
/// assert_eq!(missing.error.as_deref(), Some("Not Found"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip)]
    pub http_status: HttpStatusCode,
}

impl ApiResponse {
    /// Create a successful response carrying a message
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
            http_status: status.into(),
        }
    }

    /// Shorthand for a 200 OK message
    pub fn ok(message: impl Into<String>) -> Self {
        Self::message(StatusCode::Ok, message)
    }

    /// Create an error response
    pub fn error(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(error.into()),
            http_status: status.into(),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.http_status, Json(self)).into_response()
    }
}
