use actix_web::{patch, web, Responder};
use serde::Deserialize;
use std::str::FromStr;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::issue::application::ports::outgoing::IssuePatch;
use crate::issue::application::use_cases::patch_issue::PatchIssueError;
use crate::issue::domain::entities::{GeoPoint, IssuePriority, IssueStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::IssueDto;

#[derive(Debug, Deserialize)]
pub struct PatchIssueRequestDto {
    #[serde(default)]
    pub issue_type_id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[patch("/api/issues/{id}")]
pub async fn patch_issue_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchIssueRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let issue_id = path.into_inner();
    let dto = req.into_inner();

    let status = match dto.status.as_deref().map(IssueStatus::from_str).transpose() {
        Ok(s) => s,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e),
    };

    let priority = match dto.priority.as_deref().map(IssuePriority::from_str).transpose() {
        Ok(p) => p,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e),
    };

    let location = match (dto.latitude, dto.longitude) {
        (Some(lat), Some(lng)) => match GeoPoint::new(lat, lng) {
            Ok(point) => Some(Some(point)),
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        },
        // Location is only touched when a full pair is sent
        _ => None,
    };

    if let Some(title) = &dto.title {
        if title.trim().is_empty() {
            return ApiResponse::bad_request("VALIDATION_ERROR", "Title cannot be empty");
        }
    }

    let patch = IssuePatch {
        issue_type_id: dto.issue_type_id,
        title: dto.title.map(|t| t.trim().to_string()),
        description: dto.description,
        status,
        priority,
        location,
    };

    match data
        .patch_issue_use_case
        .execute(user.user_id, user.role, issue_id, patch)
        .await
    {
        Ok(issue) => ApiResponse::success(IssueDto::from(issue)),

        Err(PatchIssueError::IssueNotFound) => {
            ApiResponse::not_found("ISSUE_NOT_FOUND", "Issue not found")
        }

        Err(PatchIssueError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to modify this issue")
        }

        Err(PatchIssueError::IssueTypeNotFound) => {
            ApiResponse::bad_request("ISSUE_TYPE_NOT_FOUND", "Issue type not found")
        }

        Err(PatchIssueError::RepositoryError(ref e)) => {
            error!(error = %e, "Issue update failed");
            ApiResponse::internal_error()
        }
    }
}
