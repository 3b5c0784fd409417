use async_trait::async_trait;

use crate::issue_type::application::ports::{
    incoming::use_cases::{CreateIssueTypeCommand, CreateIssueTypeError, CreateIssueTypeUseCase},
    outgoing::{CreateIssueTypeData, IssueTypeRepository, IssueTypeRepositoryError},
};
use crate::issue_type::application::domain::entities::IssueType;

#[derive(Debug, Clone)]
pub struct CreateIssueTypeService<R>
where
    R: IssueTypeRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateIssueTypeService<R>
where
    R: IssueTypeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateIssueTypeUseCase for CreateIssueTypeService<R>
where
    R: IssueTypeRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateIssueTypeCommand,
    ) -> Result<IssueType, CreateIssueTypeError> {
        let data = CreateIssueTypeData {
            name: command.name().to_string(),
            sample_form: command.sample_form().cloned(),
        };

        self.repository
            .create_issue_type(data)
            .await
            .map_err(|e| match e {
                IssueTypeRepositoryError::IssueTypeAlreadyExists => {
                    CreateIssueTypeError::IssueTypeAlreadyExists
                }
                other => CreateIssueTypeError::RepositoryError(other.to_string()),
            })
    }
}
