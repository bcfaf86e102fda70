use crate::common::ApiResponse;

pub const HOME_MESSAGE: &str = "Hello World";

/// GET /
pub async fn read_home() -> ApiResponse {
    ApiResponse::ok(HOME_MESSAGE)
}
