use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_user::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::UserDto;

/// Fetch a user profile
///
/// Visible to the profile owner and to administrators.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = inline(SuccessResponse<UserDto>)),
        (status = 403, description = "Not the owner and not an administrator", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
    )
)]
#[get("/api/users/{id}")]
pub async fn fetch_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target_id = path.into_inner();

    match data
        .fetch_user_use_case
        .execute(user.user_id, user.role, target_id)
        .await
    {
        Ok(profile) => ApiResponse::success(UserDto::from(profile)),

        Err(FetchUserError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to view this user")
        }

        Err(FetchUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchUserError::QueryError(ref e)) => {
            error!(error = %e, "User fetch failed");
            ApiResponse::internal_error()
        }
    }
}
