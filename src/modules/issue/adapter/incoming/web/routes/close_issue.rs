use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::issue::application::use_cases::close_issue::CloseIssueError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::IssueDto;

/// `POST /api/issues/{id}/close` — owner or administrator.
#[post("/api/issues/{id}/close")]
pub async fn close_issue_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let issue_id = path.into_inner();

    match data
        .close_issue_use_case
        .execute(user.user_id, user.role, issue_id)
        .await
    {
        Ok(issue) => {
            info!(issue_id = %issue.id, user_id = %user.user_id, "Issue closed");
            ApiResponse::success(IssueDto::from(issue))
        }

        Err(CloseIssueError::IssueNotFound) => {
            ApiResponse::not_found("ISSUE_NOT_FOUND", "Issue not found")
        }

        Err(CloseIssueError::Forbidden) => ApiResponse::forbidden(
            "FORBIDDEN",
            "You do not have permission to close this issue",
        ),

        Err(CloseIssueError::RepositoryError(ref e)) => {
            error!(error = %e, "Issue close failed");
            ApiResponse::internal_error()
        }
    }
}
