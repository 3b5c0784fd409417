use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::issue::application::ports::outgoing::{IssueFilter, IssueQuery, IssueQueryError};
use crate::issue::domain::entities::Issue;

use super::issue_repository_postgres::IssueRepositoryPostgres;
use super::sea_orm_entity::issues::{Column as IssueColumn, Entity as IssueEntity};

#[derive(Clone, Debug)]
pub struct IssueQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IssueQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IssueQuery for IssueQueryPostgres {
    async fn find_by_id(&self, issue_id: Uuid) -> Result<Option<Issue>, IssueQueryError> {
        let model = IssueEntity::find_by_id(issue_id)
            .one(&*self.db)
            .await
            .map_err(|e| IssueQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(IssueRepositoryPostgres::map_to_issue))
    }

    async fn list(&self, filter: IssueFilter) -> Result<Vec<Issue>, IssueQueryError> {
        let mut query = IssueEntity::find();

        if let Some(status) = filter.status {
            query = query.filter(IssueColumn::Status.eq(status.as_str()));
        }
        if let Some(priority) = filter.priority {
            query = query.filter(IssueColumn::Priority.eq(priority.as_str()));
        }
        if let Some(issue_type_id) = filter.issue_type_id {
            query = query.filter(IssueColumn::IssueTypeId.eq(issue_type_id));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(IssueColumn::UserId.eq(user_id));
        }
        if let Some(search_title) = &filter.search_title {
            query = query.filter(IssueColumn::Title.contains(search_title));
        }

        let models = query
            .order_by_desc(IssueColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| IssueQueryError::DatabaseError(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(IssueRepositoryPostgres::map_to_issue)
            .collect())
    }
}
