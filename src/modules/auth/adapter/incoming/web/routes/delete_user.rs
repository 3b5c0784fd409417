use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::delete_user::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

/// Delete a user
///
/// Users delete themselves, administrators delete anyone; administrator
/// accounts are only deletable by administrators. The target's issues,
/// votes and notifications go with the row.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Not allowed", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
    )
)]
#[delete("/api/users/{id}")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target_id = path.into_inner();

    match data
        .delete_user_use_case
        .execute(user.user_id, user.role, target_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteUserError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to delete this user")
        }

        Err(DeleteUserError::AdminNotDeletable) => {
            ApiResponse::forbidden("ADMIN_NOT_DELETABLE", "Cannot delete administrator accounts")
        }

        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteUserError::RepositoryError(ref e)) => {
            error!(error = %e, "User deletion failed");
            ApiResponse::internal_error()
        }
    }
}
