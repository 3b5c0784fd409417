use async_trait::async_trait;
use uuid::Uuid;

use crate::issue_type::application::ports::{
    incoming::use_cases::{DeleteIssueTypeError, DeleteIssueTypeUseCase},
    outgoing::{IssueTypeRepository, IssueTypeRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteIssueTypeService<R>
where
    R: IssueTypeRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteIssueTypeService<R>
where
    R: IssueTypeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteIssueTypeUseCase for DeleteIssueTypeService<R>
where
    R: IssueTypeRepository + Send + Sync,
{
    async fn execute(&self, issue_type_id: Uuid) -> Result<(), DeleteIssueTypeError> {
        self.repository
            .delete_issue_type(issue_type_id)
            .await
            .map_err(|e| match e {
                IssueTypeRepositoryError::IssueTypeNotFound => {
                    DeleteIssueTypeError::IssueTypeNotFound
                }
                IssueTypeRepositoryError::IssueTypeInUse => DeleteIssueTypeError::IssueTypeInUse,
                other => DeleteIssueTypeError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue_type::application::domain::entities::IssueType;
    use crate::issue_type::application::ports::outgoing::CreateIssueTypeData;

    struct MockRepo {
        error: Option<IssueTypeRepositoryError>,
    }

    #[async_trait]
    impl IssueTypeRepository for MockRepo {
        async fn create_issue_type(
            &self,
            _data: CreateIssueTypeData,
        ) -> Result<IssueType, IssueTypeRepositoryError> {
            unimplemented!()
        }

        async fn list_issue_types(&self) -> Result<Vec<IssueType>, IssueTypeRepositoryError> {
            Ok(vec![])
        }

        async fn delete_issue_type(
            &self,
            _issue_type_id: Uuid,
        ) -> Result<(), IssueTypeRepositoryError> {
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn test_delete_success() {
        let service = DeleteIssueTypeService::new(MockRepo { error: None });
        assert!(service.execute(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_referenced_type() {
        let service = DeleteIssueTypeService::new(MockRepo {
            error: Some(IssueTypeRepositoryError::IssueTypeInUse),
        });

        let result = service.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(DeleteIssueTypeError::IssueTypeInUse)));
    }
}
