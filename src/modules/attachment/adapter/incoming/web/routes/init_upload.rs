use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::attachment::application::use_cases::init_upload::InitUploadError;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct InitUploadRequestDto {
    pub issue_id: Uuid,
    pub content_type: String,
}

/// `POST /api/attachments` — records metadata and returns a direct
/// upload URL; the blob never passes through this service.
#[post("/api/attachments")]
pub async fn init_upload_handler(
    user: AuthenticatedUser,
    req: web::Json<InitUploadRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .init_upload_use_case
        .execute(dto.issue_id, dto.content_type)
        .await
    {
        Ok(response) => {
            info!(
                user_id = %user.user_id,
                issue_id = %response.attachment.issue_id,
                "Attachment upload initialized"
            );
            ApiResponse::created(response)
        }

        Err(InitUploadError::IssueNotFound) => {
            ApiResponse::not_found("ISSUE_NOT_FOUND", "Issue not found")
        }

        Err(InitUploadError::DisallowedContentType(ref t)) => ApiResponse::bad_request(
            "DISALLOWED_CONTENT_TYPE",
            &format!("Content type '{}' is not allowed", t),
        ),

        Err(InitUploadError::SignError(ref e)) => {
            error!(error = %e, "Upload URL signing failed");
            ApiResponse::internal_error()
        }

        Err(InitUploadError::RepositoryError(ref e)) => {
            error!(error = %e, "Attachment creation failed");
            ApiResponse::internal_error()
        }
    }
}
