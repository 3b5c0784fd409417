use async_trait::async_trait;
use uuid::Uuid;

use crate::issue::domain::entities::{GeoPoint, Issue, IssuePriority, IssueStatus};

#[derive(Debug, Clone)]
pub struct CreateIssueData {
    pub user_id: Uuid,
    pub issue_type_id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: IssuePriority,
    pub location: Option<GeoPoint>,
}

/// Partial update. `None` leaves the column untouched.
///
/// `closed_at` is not part of the patch on purpose: the repository stamps
/// it when (and only when) `status` first enters a terminal state, and
/// leaves it alone on every other transition, re-opening included.
#[derive(Debug, Clone, Default)]
pub struct IssuePatch {
    pub issue_type_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub location: Option<Option<GeoPoint>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum IssueRepositoryError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("Issue type not found")]
    IssueTypeNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait IssueRepository: Send + Sync {
    async fn create_issue(&self, data: CreateIssueData) -> Result<Issue, IssueRepositoryError>;

    async fn update_issue(
        &self,
        issue_id: Uuid,
        patch: IssuePatch,
    ) -> Result<Issue, IssueRepositoryError>;

    /// Attachments, votes and notifications referencing the issue go
    /// with it (schema cascades).
    async fn delete_issue(&self, issue_id: Uuid) -> Result<(), IssueRepositoryError>;
}
