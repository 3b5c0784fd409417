use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_user::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::UserDto;

/// Current user profile
///
/// Returns the profile of the access token's subject.
#[utoipa::path(
    get,
    path = "/api/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own profile", body = inline(SuccessResponse<UserDto>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/me")]
pub async fn current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_user_use_case
        .execute(user.user_id, user.role, user.user_id)
        .await
    {
        Ok(profile) => ApiResponse::success(UserDto::from(profile)),

        Err(FetchUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchUserError::Forbidden) => {
            // Self-fetch can't be forbidden; treat as an invariant break
            error!(user_id = %user.user_id, "Self profile fetch returned Forbidden");
            ApiResponse::internal_error()
        }

        Err(FetchUserError::QueryError(ref e)) => {
            error!(error = %e, "Profile query failed");
            ApiResponse::internal_error()
        }
    }
}
