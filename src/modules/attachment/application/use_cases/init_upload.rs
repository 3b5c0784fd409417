use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::attachment::application::domain::entities::IssueAttachment;
use crate::attachment::application::domain::upload_policy;
use crate::attachment::application::ports::outgoing::{
    AttachmentRepository, AttachmentRepositoryError, AttachmentStore, CreateAttachmentData,
};
use crate::issue::application::ports::outgoing::IssueQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum InitUploadError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("Content type '{0}' is not allowed")]
    DisallowedContentType(String),

    #[error("Failed to sign upload URL: {0}")]
    SignError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct InitUploadResponse {
    pub attachment: IssueAttachment,
    /// Client PUTs the blob here; expires after a few minutes.
    pub upload_url: String,
}

#[async_trait]
pub trait IInitUploadUseCase: Send + Sync {
    async fn execute(
        &self,
        issue_id: Uuid,
        content_type: String,
    ) -> Result<InitUploadResponse, InitUploadError>;
}

/// Records attachment metadata and mints the direct-upload URL. The
/// object name is server-chosen (`issues/{issue}/{attachment}`), never
/// client input.
#[derive(Clone)]
pub struct InitUploadUseCase<Q, R>
where
    Q: IssueQuery + Send + Sync,
    R: AttachmentRepository + Send + Sync,
{
    issue_query: Q,
    repository: R,
    store: Arc<dyn AttachmentStore>,
}

impl<Q, R> InitUploadUseCase<Q, R>
where
    Q: IssueQuery + Send + Sync,
    R: AttachmentRepository + Send + Sync,
{
    pub fn new(issue_query: Q, repository: R, store: Arc<dyn AttachmentStore>) -> Self {
        Self {
            issue_query,
            repository,
            store,
        }
    }
}

#[async_trait]
impl<Q, R> IInitUploadUseCase for InitUploadUseCase<Q, R>
where
    Q: IssueQuery + Send + Sync,
    R: AttachmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        issue_id: Uuid,
        content_type: String,
    ) -> Result<InitUploadResponse, InitUploadError> {
        upload_policy::validate_content_type(&content_type)
            .map_err(|e| InitUploadError::DisallowedContentType(e.0))?;

        self.issue_query
            .find_by_id(issue_id)
            .await
            .map_err(|e| InitUploadError::RepositoryError(e.to_string()))?
            .ok_or(InitUploadError::IssueNotFound)?;

        let attachment_id = Uuid::new_v4();
        let object_name = format!("issues/{}/{}", issue_id, attachment_id);

        let attachment = self
            .repository
            .create_attachment(CreateAttachmentData {
                issue_id,
                object_name: object_name.clone(),
                content_type: content_type.trim().to_lowercase(),
            })
            .await
            .map_err(|e| match e {
                AttachmentRepositoryError::IssueNotFound => InitUploadError::IssueNotFound,
                other => InitUploadError::RepositoryError(other.to_string()),
            })?;

        let upload_url = self
            .store
            .signed_upload_url(&object_name)
            .await
            .map_err(|e| InitUploadError::SignError(e.to_string()))?;

        Ok(InitUploadResponse {
            attachment,
            upload_url,
        })
    }
}
