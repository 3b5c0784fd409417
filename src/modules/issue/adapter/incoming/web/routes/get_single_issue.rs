use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::issue::application::use_cases::fetch_issue::FetchIssueError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::IssueDto;

/// `GET /api/issues/{id}` — public.
#[get("/api/issues/{id}")]
pub async fn get_single_issue_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_issue_use_case.execute(path.into_inner()).await {
        Ok(issue) => ApiResponse::success(IssueDto::from(issue)),

        Err(FetchIssueError::IssueNotFound) => {
            ApiResponse::not_found("ISSUE_NOT_FOUND", "Issue not found")
        }

        Err(FetchIssueError::QueryError(ref e)) => {
            error!(error = %e, "Issue fetch failed");
            ApiResponse::internal_error()
        }
    }
}
