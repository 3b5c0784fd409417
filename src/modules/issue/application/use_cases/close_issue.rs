use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::issue::application::ports::outgoing::IssuePatch;
use crate::issue::application::use_cases::patch_issue::{IPatchIssueUseCase, PatchIssueError};
use crate::issue::domain::entities::{Issue, IssueStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CloseIssueError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("You do not have permission to close this issue")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICloseIssueUseCase: Send + Sync {
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        issue_id: Uuid,
    ) -> Result<Issue, CloseIssueError>;
}

/// The dedicated close endpoint is sugar over patching the status; it
/// shares the patch use case so the owner-or-admin rule and the
/// `closed_at` stamp exist in exactly one place.
#[derive(Clone)]
pub struct CloseIssueUseCase<P>
where
    P: IPatchIssueUseCase,
{
    patch_use_case: P,
}

impl<P> CloseIssueUseCase<P>
where
    P: IPatchIssueUseCase,
{
    pub fn new(patch_use_case: P) -> Self {
        Self { patch_use_case }
    }
}

// Blanket-ish helper so `CloseIssueUseCase<Arc<dyn IPatchIssueUseCase>>`
// works in wiring without a second implementation.
#[async_trait]
impl IPatchIssueUseCase for std::sync::Arc<dyn IPatchIssueUseCase + Send + Sync> {
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        issue_id: Uuid,
        patch: IssuePatch,
    ) -> Result<Issue, PatchIssueError> {
        (**self)
            .execute(acting_user_id, acting_role, issue_id, patch)
            .await
    }
}

#[async_trait]
impl<P> ICloseIssueUseCase for CloseIssueUseCase<P>
where
    P: IPatchIssueUseCase,
{
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        issue_id: Uuid,
    ) -> Result<Issue, CloseIssueError> {
        let patch = IssuePatch {
            status: Some(IssueStatus::Closed),
            ..Default::default()
        };

        self.patch_use_case
            .execute(acting_user_id, acting_role, issue_id, patch)
            .await
            .map_err(|e| match e {
                PatchIssueError::IssueNotFound => CloseIssueError::IssueNotFound,
                PatchIssueError::Forbidden => CloseIssueError::Forbidden,
                other => CloseIssueError::RepositoryError(other.to_string()),
            })
    }
}
