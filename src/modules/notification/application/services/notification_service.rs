use async_trait::async_trait;
use tracing::debug;

use crate::notification::application::domain::entities::NotificationEvent;
use crate::notification::application::domain::templates;
use crate::notification::application::ports::outgoing::{
    CitizenNotifier, NewNotification, NotificationRepository, NotifierError,
};

/// Renders an event through its template and persists the result.
#[derive(Clone)]
pub struct NotificationService<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> NotificationService<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CitizenNotifier for NotificationService<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn notify(&self, event: NotificationEvent) -> Result<(), NotifierError> {
        let rendered = templates::render(&event);

        let record = NewNotification {
            user_id: event.user_id(),
            issue_id: event.issue_id(),
            title: rendered.title,
            message: rendered.message,
            category: rendered.category,
            event_type: event.event_type().to_string(),
            urgency_level: rendered.urgency_level,
        };

        self.repository
            .record(record)
            .await
            .map_err(|e| NotifierError::StorageError(e.to_string()))?;

        debug!(user_id = %event.user_id(), event_type = %event.event_type(), "Notification recorded");
        Ok(())
    }
}
