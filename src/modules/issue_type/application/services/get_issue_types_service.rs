use async_trait::async_trait;

use crate::issue_type::application::domain::entities::IssueType;
use crate::issue_type::application::ports::{
    incoming::use_cases::{GetIssueTypesError, GetIssueTypesUseCase},
    outgoing::IssueTypeRepository,
};

#[derive(Debug, Clone)]
pub struct GetIssueTypesService<R>
where
    R: IssueTypeRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetIssueTypesService<R>
where
    R: IssueTypeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetIssueTypesUseCase for GetIssueTypesService<R>
where
    R: IssueTypeRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<IssueType>, GetIssueTypesError> {
        self.repository
            .list_issue_types()
            .await
            .map_err(|e| GetIssueTypesError::RepositoryError(e.to_string()))
    }
}
