use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::{Notification, NotificationCategory};

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub issue_id: Option<Uuid>,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub event_type: String,
    pub urgency_level: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationRepositoryError {
    #[error("Notification not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn record(&self, data: NewNotification)
        -> Result<Notification, NotificationRepositoryError>;

    /// Inbox: unread first, newest first within each group.
    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Notification>, NotificationRepositoryError>;

    async fn find_by_id(
        &self,
        notification_id: Uuid,
    ) -> Result<Option<Notification>, NotificationRepositoryError>;

    async fn mark_read(&self, notification_id: Uuid)
        -> Result<(), NotificationRepositoryError>;
}
