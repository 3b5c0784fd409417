use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::Notification;
use crate::notification::application::ports::outgoing::NotificationRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListNotificationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListNotificationsUseCase: Send + Sync {
    /// A user's inbox is only ever their own; the acting user id comes
    /// from the access token, so there is nothing to authorize here.
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Notification>, ListNotificationsError>;
}

#[derive(Clone)]
pub struct ListNotificationsUseCase<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListNotificationsUseCase<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListNotificationsUseCase for ListNotificationsUseCase<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Notification>, ListNotificationsError> {
        self.repository
            .list_for_user(user_id)
            .await
            .map_err(|e| ListNotificationsError::RepositoryError(e.to_string()))
    }
}
