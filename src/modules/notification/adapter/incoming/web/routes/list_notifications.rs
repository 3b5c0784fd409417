use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::use_cases::list_notifications::ListNotificationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// `GET /api/notifications` — the caller's inbox, unread first.
#[get("/api/notifications")]
pub async fn list_notifications_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_notifications_use_case
        .execute(user.user_id)
        .await
    {
        Ok(notifications) => ApiResponse::success(notifications),

        Err(ListNotificationsError::RepositoryError(ref e)) => {
            error!(error = %e, "Notification listing failed");
            ApiResponse::internal_error()
        }
    }
}
