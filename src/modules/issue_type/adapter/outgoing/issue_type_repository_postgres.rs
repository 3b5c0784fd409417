use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::issue_type::application::domain::entities::IssueType;
use crate::issue_type::application::ports::outgoing::{
    CreateIssueTypeData, IssueTypeRepository, IssueTypeRepositoryError,
};

use super::sea_orm_entity::{
    ActiveModel as IssueTypeActiveModel, Column as IssueTypeColumn, Entity as IssueTypeEntity,
    Model as IssueTypeModel,
};

#[derive(Debug, Clone)]
pub struct IssueTypeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IssueTypeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_issue_type(model: IssueTypeModel) -> IssueType {
        IssueType {
            id: model.id,
            name: model.name,
            sample_form: model.sample_form,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl IssueTypeRepository for IssueTypeRepositoryPostgres {
    async fn create_issue_type(
        &self,
        data: CreateIssueTypeData,
    ) -> Result<IssueType, IssueTypeRepositoryError> {
        let active = IssueTypeActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            sample_form: Set(data.sample_form),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
                return IssueTypeRepositoryError::IssueTypeAlreadyExists;
            }
            IssueTypeRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_issue_type(inserted))
    }

    async fn list_issue_types(&self) -> Result<Vec<IssueType>, IssueTypeRepositoryError> {
        let models = IssueTypeEntity::find()
            .order_by_asc(IssueTypeColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| IssueTypeRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(Self::map_to_issue_type)
            .collect())
    }

    async fn delete_issue_type(
        &self,
        issue_type_id: Uuid,
    ) -> Result<(), IssueTypeRepositoryError> {
        let model = IssueTypeEntity::find_by_id(issue_type_id)
            .one(&*self.db)
            .await
            .map_err(|e| IssueTypeRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(IssueTypeRepositoryError::IssueTypeNotFound)?;

        model.delete(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            // RESTRICT FK from issues
            if err_str.contains("foreign key") || err_str.contains("violates") {
                return IssueTypeRepositoryError::IssueTypeInUse;
            }
            IssueTypeRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
