use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::attachment::application::use_cases::list_attachments::ListAttachmentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListAttachmentsQuery {
    pub issue_id: Uuid,
}

/// `GET /api/attachments?issue_id=...` — public, like the issues they
/// belong to.
#[get("/api/attachments")]
pub async fn list_attachments_handler(
    query: web::Query<ListAttachmentsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_attachments_use_case
        .execute(query.issue_id)
        .await
    {
        Ok(attachments) => ApiResponse::success(attachments),

        Err(ListAttachmentsError::RepositoryError(ref e)) => {
            error!(error = %e, "Attachment listing failed");
            ApiResponse::internal_error()
        }
    }
}
