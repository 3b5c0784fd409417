use async_trait::async_trait;
use uuid::Uuid;

use crate::issue::domain::entities::{Issue, IssuePriority, IssueStatus};

/// Filters for the public issue listing; all optional, ANDed together.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub issue_type_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    /// Case-insensitive substring match on the title.
    pub search_title: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum IssueQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait IssueQuery: Send + Sync {
    async fn find_by_id(&self, issue_id: Uuid) -> Result<Option<Issue>, IssueQueryError>;

    /// Newest first.
    async fn list(&self, filter: IssueFilter) -> Result<Vec<Issue>, IssueQueryError>;
}
