use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::use_cases::mark_notification_read::MarkNotificationReadError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

/// `POST /api/notifications/{id}/read` — owner only.
#[post("/api/notifications/{id}/read")]
pub async fn mark_notification_read_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let notification_id = path.into_inner();

    match data
        .mark_notification_read_use_case
        .execute(user.user_id, notification_id)
        .await
    {
        Ok(()) => ApiResponse::ok_message("Notification marked as read"),

        Err(MarkNotificationReadError::NotFound) => {
            ApiResponse::not_found("NOTIFICATION_NOT_FOUND", "Notification not found")
        }

        Err(MarkNotificationReadError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to modify this notification")
        }

        Err(MarkNotificationReadError::RepositoryError(ref e)) => {
            error!(error = %e, "Mark-as-read failed");
            ApiResponse::internal_error()
        }
    }
}
