use async_trait::async_trait;
use uuid::Uuid;

use crate::issue_type::application::domain::entities::IssueType;

#[derive(Debug, Clone)]
pub struct CreateIssueTypeData {
    pub name: String,
    pub sample_form: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum IssueTypeRepositoryError {
    #[error("Issue type not found")]
    IssueTypeNotFound,

    #[error("Issue type already exists")]
    IssueTypeAlreadyExists,

    /// The FK from issues is RESTRICT; deleting a referenced type fails.
    #[error("Issue type is still referenced")]
    IssueTypeInUse,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait IssueTypeRepository: Send + Sync {
    async fn create_issue_type(
        &self,
        data: CreateIssueTypeData,
    ) -> Result<IssueType, IssueTypeRepositoryError>;

    async fn list_issue_types(&self) -> Result<Vec<IssueType>, IssueTypeRepositoryError>;

    async fn delete_issue_type(&self, issue_type_id: Uuid)
        -> Result<(), IssueTypeRepositoryError>;
}
