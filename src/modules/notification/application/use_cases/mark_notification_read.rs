use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::ports::outgoing::{
    NotificationRepository, NotificationRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkNotificationReadError {
    #[error("Notification not found")]
    NotFound,

    #[error("Not allowed to modify this notification")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IMarkNotificationReadUseCase: Send + Sync {
    async fn execute(
        &self,
        acting_user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<(), MarkNotificationReadError>;
}

#[derive(Clone)]
pub struct MarkNotificationReadUseCase<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> MarkNotificationReadUseCase<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IMarkNotificationReadUseCase for MarkNotificationReadUseCase<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        acting_user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<(), MarkNotificationReadError> {
        let notification = self
            .repository
            .find_by_id(notification_id)
            .await
            .map_err(|e| MarkNotificationReadError::RepositoryError(e.to_string()))?
            .ok_or(MarkNotificationReadError::NotFound)?;

        if notification.user_id != acting_user_id {
            return Err(MarkNotificationReadError::Forbidden);
        }

        self.repository
            .mark_read(notification_id)
            .await
            .map_err(|e| match e {
                NotificationRepositoryError::NotFound => MarkNotificationReadError::NotFound,
                other => MarkNotificationReadError::RepositoryError(other.to_string()),
            })
    }
}
