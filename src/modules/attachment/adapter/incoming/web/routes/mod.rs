pub mod init_upload;
pub mod list_attachments;

pub use init_upload::init_upload_handler;
pub use list_attachments::list_attachments_handler;
