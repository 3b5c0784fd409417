pub mod citizen_notifier;
pub mod notification_repository;

pub use citizen_notifier::{CitizenNotifier, NotifierError};
pub use notification_repository::{
    NewNotification, NotificationRepository, NotificationRepositoryError,
};
