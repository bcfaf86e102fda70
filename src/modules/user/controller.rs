use crate::common::{ApiResponse, StatusCode};
use crate::di::Inject;
use crate::error::Result;
use crate::modules::user::model::CreateUserRequest;
use crate::modules::user::service::UserService;
use crate::pipe::ValidatedJson;

/// POST /users
///
/// A body that does not decode is rejected by the extractor with 422; a
/// blank name is rejected by the service with 400.
pub async fn create_user(
    Inject(service): Inject<UserService>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<ApiResponse> {
    let user = service.create(req).await?;
    Ok(ApiResponse::message(
        StatusCode::Created,
        user.created_message(),
    ))
}
