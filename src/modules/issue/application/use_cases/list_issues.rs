use async_trait::async_trait;

use crate::issue::application::ports::outgoing::{IssueFilter, IssueQuery};
use crate::issue::domain::entities::Issue;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListIssuesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListIssuesUseCase: Send + Sync {
    async fn execute(&self, filter: IssueFilter) -> Result<Vec<Issue>, ListIssuesError>;
}

#[derive(Clone)]
pub struct ListIssuesUseCase<Q>
where
    Q: IssueQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListIssuesUseCase<Q>
where
    Q: IssueQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListIssuesUseCase for ListIssuesUseCase<Q>
where
    Q: IssueQuery + Send + Sync,
{
    async fn execute(&self, filter: IssueFilter) -> Result<Vec<Issue>, ListIssuesError> {
        self.query
            .list(filter)
            .await
            .map_err(|e| ListIssuesError::QueryError(e.to_string()))
    }
}
