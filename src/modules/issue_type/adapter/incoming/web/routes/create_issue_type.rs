use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::issue_type::application::ports::incoming::use_cases::{
    CreateIssueTypeCommand, CreateIssueTypeError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateIssueTypeRequestDto {
    pub name: String,
    #[serde(default)]
    pub sample_form: Option<String>,
}

/// `POST /api/issue_types` — administrators only.
#[post("/api/issue_types")]
pub async fn create_issue_type_handler(
    admin: AdminUser,
    req: web::Json<CreateIssueTypeRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateIssueTypeCommand::new(dto.name, dto.sample_form) {
        Ok(cmd) => cmd,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.issue_type_use_cases.create.execute(command).await {
        Ok(issue_type) => {
            info!(admin_id = %admin.user_id, name = %issue_type.name, "Issue type created");
            ApiResponse::created(issue_type)
        }

        Err(CreateIssueTypeError::IssueTypeAlreadyExists) => {
            ApiResponse::conflict("ISSUE_TYPE_EXISTS", "Issue type already exists")
        }

        Err(CreateIssueTypeError::RepositoryError(ref e)) => {
            error!(error = %e, "Issue type creation failed");
            ApiResponse::internal_error()
        }
    }
}
