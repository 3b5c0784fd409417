pub mod list_notifications;
pub mod mark_notification_read;
