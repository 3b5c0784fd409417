use async_trait::async_trait;

use crate::notification::application::domain::entities::NotificationEvent;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotifierError {
    #[error("Notification storage error: {0}")]
    StorageError(String),
}

/// How the rest of the system raises notifications.
///
/// Callers treat delivery as best-effort: auth and issue flows log a
/// failure and move on, they never roll back on it.
#[async_trait]
pub trait CitizenNotifier: Send + Sync {
    async fn notify(&self, event: NotificationEvent) -> Result<(), NotifierError>;
}
