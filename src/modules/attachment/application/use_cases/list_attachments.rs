use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::attachment::application::domain::entities::IssueAttachment;
use crate::attachment::application::ports::outgoing::{AttachmentRepository, AttachmentStore};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAttachmentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct AttachmentWithUrl {
    #[serde(flatten)]
    pub attachment: IssueAttachment,
    /// Signed read URL; `None` when signing failed for this object (the
    /// metadata is still listed).
    pub download_url: Option<String>,
}

#[async_trait]
pub trait IListAttachmentsUseCase: Send + Sync {
    async fn execute(&self, issue_id: Uuid)
        -> Result<Vec<AttachmentWithUrl>, ListAttachmentsError>;
}

#[derive(Clone)]
pub struct ListAttachmentsUseCase<R>
where
    R: AttachmentRepository + Send + Sync,
{
    repository: R,
    store: Arc<dyn AttachmentStore>,
}

impl<R> ListAttachmentsUseCase<R>
where
    R: AttachmentRepository + Send + Sync,
{
    pub fn new(repository: R, store: Arc<dyn AttachmentStore>) -> Self {
        Self { repository, store }
    }
}

#[async_trait]
impl<R> IListAttachmentsUseCase for ListAttachmentsUseCase<R>
where
    R: AttachmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        issue_id: Uuid,
    ) -> Result<Vec<AttachmentWithUrl>, ListAttachmentsError> {
        let attachments = self
            .repository
            .list_by_issue(issue_id)
            .await
            .map_err(|e| ListAttachmentsError::RepositoryError(e.to_string()))?;

        // Sign all read URLs concurrently; one bad object doesn't sink
        // the listing
        let signed = join_all(attachments.into_iter().map(|attachment| async {
            let url = match self.store.signed_read_url(&attachment.object_name).await {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!(object = %attachment.object_name, "Read URL signing failed: {}", e);
                    None
                }
            };

            AttachmentWithUrl {
                attachment,
                download_url: url,
            }
        }))
        .await;

        Ok(signed)
    }
}
