use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteIssueTypeError {
    #[error("Issue type not found")]
    IssueTypeNotFound,

    #[error("Issue type is still referenced by issues")]
    IssueTypeInUse,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteIssueTypeUseCase: Send + Sync {
    async fn execute(&self, issue_type_id: Uuid) -> Result<(), DeleteIssueTypeError>;
}
