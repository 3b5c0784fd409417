use actix_web::{post, web, Responder};
use serde::Deserialize;
use std::str::FromStr;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::issue::application::use_cases::create_issue::{
    CreateIssueCommand, CreateIssueError,
};
use crate::issue::domain::entities::IssuePriority;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::IssueDto;

#[derive(Debug, Deserialize)]
pub struct CreateIssueRequestDto {
    pub issue_type_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[post("/api/issues")]
pub async fn create_issue_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateIssueRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let priority = match dto.priority.as_deref().map(IssuePriority::from_str).transpose() {
        Ok(p) => p,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e);
        }
    };

    // Owner is the caller; the body cannot choose one
    let command = match CreateIssueCommand::new(
        user.user_id,
        dto.issue_type_id,
        dto.title,
        dto.description,
        priority,
        dto.latitude,
        dto.longitude,
    ) {
        Ok(cmd) => cmd,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.create_issue_use_case.execute(command).await {
        Ok(issue) => {
            info!(issue_id = %issue.id, user_id = %user.user_id, "Issue reported");
            ApiResponse::created(IssueDto::from(issue))
        }

        Err(CreateIssueError::IssueTypeNotFound) => {
            ApiResponse::bad_request("ISSUE_TYPE_NOT_FOUND", "Issue type not found")
        }

        Err(CreateIssueError::RepositoryError(ref e)) => {
            error!(error = %e, "Issue creation failed");
            ApiResponse::internal_error()
        }
    }
}
