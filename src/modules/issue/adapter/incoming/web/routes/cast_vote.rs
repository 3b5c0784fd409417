use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::issue::application::use_cases::cast_vote::{CastVoteError, CastVoteRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `POST /api/issues/{id}/vote`, body `{"value": -1|0|1}`.
///
/// Returns the fresh summary so toggle-vote UIs can render without a
/// second request.
#[post("/api/issues/{id}/vote")]
pub async fn cast_vote_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CastVoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let issue_id = path.into_inner();

    match data
        .cast_vote_use_case
        .execute(issue_id, user.user_id, req.into_inner())
        .await
    {
        Ok(summary) => ApiResponse::success(summary),

        Err(CastVoteError::IssueNotFound) => {
            ApiResponse::not_found("ISSUE_NOT_FOUND", "Issue not found")
        }

        Err(CastVoteError::RepositoryError(ref e)) => {
            error!(error = %e, "Vote cast failed");
            ApiResponse::internal_error()
        }
    }
}
