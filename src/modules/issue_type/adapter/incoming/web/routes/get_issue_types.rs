use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::issue_type::application::ports::incoming::use_cases::GetIssueTypesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `GET /api/issue_types` — any authenticated user.
#[get("/api/issue_types")]
pub async fn get_issue_types_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.issue_type_use_cases.get_list.execute().await {
        Ok(types) => ApiResponse::success(types),

        Err(GetIssueTypesError::RepositoryError(ref e)) => {
            error!(error = %e, "Issue type listing failed");
            ApiResponse::internal_error()
        }
    }
}
