use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::issue::application::ports::outgoing::{
    IssueQuery, IssueRepository, IssueRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteIssueError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("Not allowed to delete this issue")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteIssueUseCase: Send + Sync {
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        issue_id: Uuid,
    ) -> Result<(), DeleteIssueError>;
}

#[derive(Clone)]
pub struct DeleteIssueUseCase<Q, R>
where
    Q: IssueQuery + Send + Sync,
    R: IssueRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteIssueUseCase<Q, R>
where
    Q: IssueQuery + Send + Sync,
    R: IssueRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IDeleteIssueUseCase for DeleteIssueUseCase<Q, R>
where
    Q: IssueQuery + Send + Sync,
    R: IssueRepository + Send + Sync,
{
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        issue_id: Uuid,
    ) -> Result<(), DeleteIssueError> {
        let issue = self
            .query
            .find_by_id(issue_id)
            .await
            .map_err(|e| DeleteIssueError::RepositoryError(e.to_string()))?
            .ok_or(DeleteIssueError::IssueNotFound)?;

        if issue.user_id != acting_user_id && !acting_role.is_admin() {
            return Err(DeleteIssueError::Forbidden);
        }

        self.repository
            .delete_issue(issue_id)
            .await
            .map_err(|e| match e {
                IssueRepositoryError::IssueNotFound => DeleteIssueError::IssueNotFound,
                other => DeleteIssueError::RepositoryError(other.to_string()),
            })?;

        info!(issue_id = %issue_id, "Issue deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::application::ports::outgoing::{
        CreateIssueData, IssueFilter, IssuePatch, IssueQueryError,
    };
    use crate::issue::domain::entities::{Issue, IssuePriority, IssueStatus};
    use chrono::Utc;

    fn issue(owner: Uuid) -> Issue {
        Issue {
            id: Uuid::new_v4(),
            user_id: owner,
            issue_type_id: Uuid::new_v4(),
            title: "t".to_string(),
            description: "d".to_string(),
            status: IssueStatus::Open,
            priority: IssuePriority::Low,
            location: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            closed_at: None,
        }
    }

    struct MockQuery {
        issue: Option<Issue>,
    }

    #[async_trait]
    impl IssueQuery for MockQuery {
        async fn find_by_id(&self, _issue_id: Uuid) -> Result<Option<Issue>, IssueQueryError> {
            Ok(self.issue.clone())
        }

        async fn list(&self, _filter: IssueFilter) -> Result<Vec<Issue>, IssueQueryError> {
            Ok(vec![])
        }
    }

    struct MockRepo;

    #[async_trait]
    impl IssueRepository for MockRepo {
        async fn create_issue(
            &self,
            _data: CreateIssueData,
        ) -> Result<Issue, IssueRepositoryError> {
            unimplemented!()
        }

        async fn update_issue(
            &self,
            _issue_id: Uuid,
            _patch: IssuePatch,
        ) -> Result<Issue, IssueRepositoryError> {
            unimplemented!()
        }

        async fn delete_issue(&self, _issue_id: Uuid) -> Result<(), IssueRepositoryError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_owner_deletes_own_issue() {
        let owner = Uuid::new_v4();
        let uc = DeleteIssueUseCase::new(
            MockQuery {
                issue: Some(issue(owner)),
            },
            MockRepo,
        );

        let result = uc.execute(owner, UserRole::Citizen, Uuid::new_v4()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_stranger_forbidden() {
        let uc = DeleteIssueUseCase::new(
            MockQuery {
                issue: Some(issue(Uuid::new_v4())),
            },
            MockRepo,
        );

        let result = uc
            .execute(Uuid::new_v4(), UserRole::Citizen, Uuid::new_v4())
            .await;
        assert!(matches!(result, Err(DeleteIssueError::Forbidden)));
    }

    #[tokio::test]
    async fn test_admin_deletes_any_issue() {
        let uc = DeleteIssueUseCase::new(
            MockQuery {
                issue: Some(issue(Uuid::new_v4())),
            },
            MockRepo,
        );

        let result = uc
            .execute(Uuid::new_v4(), UserRole::Administrator, Uuid::new_v4())
            .await;
        assert!(result.is_ok());
    }
}
