use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::issue::application::ports::outgoing::{
    IssuePatch, IssueQuery, IssueRepository, IssueRepositoryError,
};
use crate::issue::domain::entities::{Issue, IssueStatus};
use crate::notification::application::domain::entities::NotificationEvent;
use crate::notification::application::ports::outgoing::citizen_notifier::CitizenNotifier;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchIssueError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("Not allowed to modify this issue")]
    Forbidden,

    #[error("Issue type not found")]
    IssueTypeNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IPatchIssueUseCase: Send + Sync {
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        issue_id: Uuid,
        patch: IssuePatch,
    ) -> Result<Issue, PatchIssueError>;
}

/// Owner-or-admin mutation of an issue's mutable fields. The owner and
/// creation time never change; `closed_at` stamping lives in the
/// repository with the status write.
#[derive(Clone)]
pub struct PatchIssueUseCase<Q, R>
where
    Q: IssueQuery + Send + Sync,
    R: IssueRepository + Send + Sync,
{
    query: Q,
    repository: R,
    notifier: Arc<dyn CitizenNotifier>,
}

impl<Q, R> PatchIssueUseCase<Q, R>
where
    Q: IssueQuery + Send + Sync,
    R: IssueRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, notifier: Arc<dyn CitizenNotifier>) -> Self {
        Self {
            query,
            repository,
            notifier,
        }
    }

    fn status_event(issue: &Issue, previous: IssueStatus) -> Option<NotificationEvent> {
        if issue.status == previous {
            return None;
        }

        match issue.status {
            IssueStatus::InProgress => Some(NotificationEvent::IssueInProgress {
                user_id: issue.user_id,
                issue_id: issue.id,
                issue_title: issue.title.clone(),
            }),
            IssueStatus::Resolved => Some(NotificationEvent::IssueResolved {
                user_id: issue.user_id,
                issue_id: issue.id,
                issue_title: issue.title.clone(),
            }),
            _ => None,
        }
    }
}

#[async_trait]
impl<Q, R> IPatchIssueUseCase for PatchIssueUseCase<Q, R>
where
    Q: IssueQuery + Send + Sync,
    R: IssueRepository + Send + Sync,
{
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        issue_id: Uuid,
        patch: IssuePatch,
    ) -> Result<Issue, PatchIssueError> {
        let existing = self
            .query
            .find_by_id(issue_id)
            .await
            .map_err(|e| PatchIssueError::RepositoryError(e.to_string()))?
            .ok_or(PatchIssueError::IssueNotFound)?;

        if existing.user_id != acting_user_id && !acting_role.is_admin() {
            return Err(PatchIssueError::Forbidden);
        }

        let previous_status = existing.status;

        let updated = self
            .repository
            .update_issue(issue_id, patch)
            .await
            .map_err(|e| match e {
                IssueRepositoryError::IssueNotFound => PatchIssueError::IssueNotFound,
                IssueRepositoryError::IssueTypeNotFound => PatchIssueError::IssueTypeNotFound,
                other => PatchIssueError::RepositoryError(other.to_string()),
            })?;

        if let Some(event) = Self::status_event(&updated, previous_status) {
            if let Err(e) = self.notifier.notify(event).await {
                warn!(issue_id = %updated.id, "Status notification failed: {}", e);
            }
        }

        Ok(updated)
    }
}
