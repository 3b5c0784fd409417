use actix_web::{get, web, Responder};
use serde::Deserialize;
use std::str::FromStr;
use tracing::error;
use uuid::Uuid;

use crate::issue::application::ports::outgoing::IssueFilter;
use crate::issue::application::use_cases::list_issues::ListIssuesError;
use crate::issue::domain::entities::{IssuePriority, IssueStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::IssueDto;

#[derive(Debug, Deserialize)]
pub struct IssueListQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub issue_type_id: Option<Uuid>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub search_title: Option<String>,
}

/// `GET /api/issues` — public listing, newest first.
#[get("/api/issues")]
pub async fn get_issues_handler(
    query: web::Query<IssueListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let q = query.into_inner();

    let status = match q.status.as_deref().map(IssueStatus::from_str).transpose() {
        Ok(s) => s,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e),
    };

    let priority = match q.priority.as_deref().map(IssuePriority::from_str).transpose() {
        Ok(p) => p,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e),
    };

    let filter = IssueFilter {
        status,
        priority,
        issue_type_id: q.issue_type_id,
        user_id: q.user_id,
        search_title: q.search_title.filter(|s| !s.trim().is_empty()),
    };

    match data.list_issues_use_case.execute(filter).await {
        Ok(issues) => {
            let dtos: Vec<IssueDto> = issues.into_iter().map(IssueDto::from).collect();
            ApiResponse::success(dtos)
        }

        Err(ListIssuesError::QueryError(ref e)) => {
            error!(error = %e, "Issue listing failed");
            ApiResponse::internal_error()
        }
    }
}
