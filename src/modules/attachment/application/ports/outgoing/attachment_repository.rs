use async_trait::async_trait;
use uuid::Uuid;

use crate::attachment::application::domain::entities::IssueAttachment;

#[derive(Debug, Clone)]
pub struct CreateAttachmentData {
    pub issue_id: Uuid,
    pub object_name: String,
    pub content_type: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttachmentRepositoryError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    async fn create_attachment(
        &self,
        data: CreateAttachmentData,
    ) -> Result<IssueAttachment, AttachmentRepositoryError>;

    /// Newest first.
    async fn list_by_issue(
        &self,
        issue_id: Uuid,
    ) -> Result<Vec<IssueAttachment>, AttachmentRepositoryError>;
}
