use async_trait::async_trait;

use crate::issue_type::application::domain::entities::IssueType;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetIssueTypesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetIssueTypesUseCase: Send + Sync {
    /// Alphabetical by name.
    async fn execute(&self) -> Result<Vec<IssueType>, GetIssueTypesError>;
}
