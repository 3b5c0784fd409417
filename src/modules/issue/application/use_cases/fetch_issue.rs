use async_trait::async_trait;
use uuid::Uuid;

use crate::issue::application::ports::outgoing::IssueQuery;
use crate::issue::domain::entities::Issue;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchIssueError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchIssueUseCase: Send + Sync {
    async fn execute(&self, issue_id: Uuid) -> Result<Issue, FetchIssueError>;
}

/// Issues are public records; no authorization on reads.
#[derive(Clone)]
pub struct FetchIssueUseCase<Q>
where
    Q: IssueQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchIssueUseCase<Q>
where
    Q: IssueQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchIssueUseCase for FetchIssueUseCase<Q>
where
    Q: IssueQuery + Send + Sync,
{
    async fn execute(&self, issue_id: Uuid) -> Result<Issue, FetchIssueError> {
        self.query
            .find_by_id(issue_id)
            .await
            .map_err(|e| FetchIssueError::QueryError(e.to_string()))?
            .ok_or(FetchIssueError::IssueNotFound)
    }
}
