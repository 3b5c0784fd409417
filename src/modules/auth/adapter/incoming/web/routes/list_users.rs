use crate::api::schemas::SuccessResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::list_users::ListUsersError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::UserDto;

/// List users
///
/// Administrators see the full directory; citizens only get their own
/// row back.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Users visible to the caller", body = inline(SuccessResponse<Vec<UserDto>>)),
    )
)]
#[get("/api/users")]
pub async fn list_users_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_users_use_case
        .execute(user.user_id, user.role)
        .await
    {
        Ok(users) => {
            let dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
            ApiResponse::success(dtos)
        }

        Err(ListUsersError::QueryError(ref e)) => {
            error!(error = %e, "User listing failed");
            ApiResponse::internal_error()
        }
    }
}
