use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::issue::application::ports::outgoing::{
    CreateIssueData, IssuePatch, IssueRepository, IssueRepositoryError,
};
use crate::issue::domain::entities::{GeoPoint, Issue, IssuePriority, IssueStatus};

use super::sea_orm_entity::issues::{
    ActiveModel as IssueActiveModel, Entity as IssueEntity, Model as IssueModel,
};

#[derive(Clone, Debug)]
pub struct IssueRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IssueRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub(super) fn map_to_issue(model: IssueModel) -> Issue {
        let location = match (model.location_latitude, model.location_longitude) {
            // Columns are written together; reject a half pair rather
            // than invent a coordinate
            (Some(lat), Some(lng)) => GeoPoint::new(lat, lng).ok(),
            _ => None,
        };

        Issue {
            id: model.id,
            user_id: model.user_id,
            issue_type_id: model.issue_type_id,
            title: model.title,
            description: model.description,
            status: IssueStatus::from_str(&model.status).unwrap_or(IssueStatus::Open),
            priority: IssuePriority::from_str(&model.priority).unwrap_or(IssuePriority::Medium),
            location,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
            closed_at: model.closed_at.map(|t| t.with_timezone(&chrono::Utc)),
        }
    }

    fn map_db_error(e: sea_orm::DbErr) -> IssueRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("fk_issues_issue_type_id") {
            return IssueRepositoryError::IssueTypeNotFound;
        }
        IssueRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl IssueRepository for IssueRepositoryPostgres {
    async fn create_issue(&self, data: CreateIssueData) -> Result<Issue, IssueRepositoryError> {
        let active = IssueActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            issue_type_id: Set(data.issue_type_id),
            title: Set(data.title),
            description: Set(data.description),
            status: Set(IssueStatus::Open.as_str().to_string()),
            priority: Set(data.priority.as_str().to_string()),
            location_latitude: Set(data.location.map(|l| l.latitude())),
            location_longitude: Set(data.location.map(|l| l.longitude())),
            created_at: NotSet,
            updated_at: NotSet,
            closed_at: Set(None),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        Ok(Self::map_to_issue(inserted))
    }

    async fn update_issue(
        &self,
        issue_id: Uuid,
        patch: IssuePatch,
    ) -> Result<Issue, IssueRepositoryError> {
        let model = IssueEntity::find_by_id(issue_id)
            .one(&*self.db)
            .await
            .map_err(|e| IssueRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(IssueRepositoryError::IssueNotFound)?;

        let had_closed_at = model.closed_at.is_some();
        let mut active: IssueActiveModel = model.into();

        if let Some(issue_type_id) = patch.issue_type_id {
            active.issue_type_id = Set(issue_type_id);
        }
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(priority) = patch.priority {
            active.priority = Set(priority.as_str().to_string());
        }
        if let Some(location) = patch.location {
            active.location_latitude = Set(location.map(|l| l.latitude()));
            active.location_longitude = Set(location.map(|l| l.longitude()));
        }
        if let Some(status) = patch.status {
            active.status = Set(status.as_str().to_string());

            // First entry into a terminal state stamps closed_at; every
            // other transition, re-opening included, leaves it alone
            if status.is_terminal() && !had_closed_at {
                active.closed_at = Set(Some(chrono::Utc::now().into()));
            }
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        Ok(Self::map_to_issue(updated))
    }

    async fn delete_issue(&self, issue_id: Uuid) -> Result<(), IssueRepositoryError> {
        let model = IssueEntity::find_by_id(issue_id)
            .one(&*self.db)
            .await
            .map_err(|e| IssueRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(IssueRepositoryError::IssueNotFound)?;

        model
            .delete(&*self.db)
            .await
            .map_err(|e| IssueRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
