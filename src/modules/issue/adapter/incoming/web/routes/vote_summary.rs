use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::issue::application::use_cases::vote_summary::VoteSummaryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `GET /api/issues/{id}/vote_summary` — public; `my_vote` personalizes
/// when a bearer token is present.
#[get("/api/issues/{id}/vote_summary")]
pub async fn vote_summary_handler(
    user: MaybeUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .vote_summary_use_case
        .execute(path.into_inner(), user.user_id())
        .await
    {
        Ok(summary) => ApiResponse::success(summary),

        Err(VoteSummaryError::IssueNotFound) => {
            ApiResponse::not_found("ISSUE_NOT_FOUND", "Issue not found")
        }

        Err(VoteSummaryError::RepositoryError(ref e)) => {
            error!(error = %e, "Vote summary failed");
            ApiResponse::internal_error()
        }
    }
}
