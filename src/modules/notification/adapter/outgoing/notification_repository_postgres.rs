use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::notification::application::domain::entities::{
    Notification, NotificationCategory,
};
use crate::notification::application::ports::outgoing::{
    NewNotification, NotificationRepository, NotificationRepositoryError,
};

use super::sea_orm_entity::{
    ActiveModel as NotificationActiveModel, Column as NotificationColumn,
    Entity as NotificationEntity, Model as NotificationModel,
};

#[derive(Clone, Debug)]
pub struct NotificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_notification(model: NotificationModel) -> Notification {
        let category = match model.category.as_str() {
            "environmental" => NotificationCategory::Environmental,
            "public_service" => NotificationCategory::PublicService,
            "community" => NotificationCategory::Community,
            _ => NotificationCategory::System,
        };

        Notification {
            id: model.id,
            user_id: model.user_id,
            issue_id: model.issue_id,
            title: model.title,
            message: model.message,
            category,
            event_type: model.event_type,
            urgency_level: model.urgency_level,
            is_read: model.is_read,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryPostgres {
    async fn record(
        &self,
        data: NewNotification,
    ) -> Result<Notification, NotificationRepositoryError> {
        let active = NotificationActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            issue_id: Set(data.issue_id),
            title: Set(data.title),
            message: Set(data.message),
            category: Set(data.category.as_str().to_string()),
            event_type: Set(data.event_type),
            urgency_level: Set(data.urgency_level),
            is_read: Set(false),
            created_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_notification(inserted))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        let models = NotificationEntity::find()
            .filter(NotificationColumn::UserId.eq(user_id))
            .order_by_asc(NotificationColumn::IsRead)
            .order_by_desc(NotificationColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(Self::map_to_notification)
            .collect())
    }

    async fn find_by_id(
        &self,
        notification_id: Uuid,
    ) -> Result<Option<Notification>, NotificationRepositoryError> {
        let model = NotificationEntity::find_by_id(notification_id)
            .one(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_notification))
    }

    async fn mark_read(
        &self,
        notification_id: Uuid,
    ) -> Result<(), NotificationRepositoryError> {
        let model = NotificationEntity::find_by_id(notification_id)
            .one(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(NotificationRepositoryError::NotFound)?;

        let mut active: NotificationActiveModel = model.into();
        active.is_read = Set(true);

        active
            .update(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(user_id: Uuid, is_read: bool) -> NotificationModel {
        NotificationModel {
            id: Uuid::new_v4(),
            user_id,
            issue_id: None,
            title: "Issue Resolved!".to_string(),
            message: "Great news!".to_string(),
            category: "public_service".to_string(),
            event_type: "citizen_issue_resolved".to_string(),
            urgency_level: 2,
            is_read,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_for_user_maps_category() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(user_id, false)]])
            .into_connection();

        let repo = NotificationRepositoryPostgres::new(Arc::new(db));
        let list = repo.list_for_user(user_id).await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].category, NotificationCategory::PublicService);
        assert!(!list[0].is_read);
    }

    #[tokio::test]
    async fn test_mark_read_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<NotificationModel>::new()])
            .into_connection();

        let repo = NotificationRepositoryPostgres::new(Arc::new(db));
        let result = repo.mark_read(Uuid::new_v4()).await;

        assert!(matches!(result, Err(NotificationRepositoryError::NotFound)));
    }
}
