use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::attachment::application::domain::entities::IssueAttachment;
use crate::attachment::application::ports::outgoing::{
    AttachmentRepository, AttachmentRepositoryError, CreateAttachmentData,
};

use super::sea_orm_entity::{
    ActiveModel as AttachmentActiveModel, Column as AttachmentColumn, Entity as AttachmentEntity,
    Model as AttachmentModel,
};

#[derive(Clone, Debug)]
pub struct AttachmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AttachmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_attachment(model: AttachmentModel) -> IssueAttachment {
        IssueAttachment {
            id: model.id,
            issue_id: model.issue_id,
            object_name: model.object_name,
            content_type: model.content_type,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl AttachmentRepository for AttachmentRepositoryPostgres {
    async fn create_attachment(
        &self,
        data: CreateAttachmentData,
    ) -> Result<IssueAttachment, AttachmentRepositoryError> {
        let active = AttachmentActiveModel {
            id: Set(Uuid::new_v4()),
            issue_id: Set(data.issue_id),
            object_name: Set(data.object_name),
            content_type: Set(data.content_type),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("fk_issue_attachments_issue_id") {
                return AttachmentRepositoryError::IssueNotFound;
            }
            AttachmentRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_attachment(inserted))
    }

    async fn list_by_issue(
        &self,
        issue_id: Uuid,
    ) -> Result<Vec<IssueAttachment>, AttachmentRepositoryError> {
        let models = AttachmentEntity::find()
            .filter(AttachmentColumn::IssueId.eq(issue_id))
            .order_by_desc(AttachmentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| AttachmentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(Self::map_to_attachment)
            .collect())
    }
}
