pub mod list_notifications;
pub mod mark_read;

pub use list_notifications::list_notifications_handler;
pub use mark_read::mark_notification_read_handler;
