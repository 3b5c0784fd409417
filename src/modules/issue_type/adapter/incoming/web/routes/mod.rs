pub mod create_issue_type;
pub mod delete_issue_type;
pub mod get_issue_types;

pub use create_issue_type::create_issue_type_handler;
pub use delete_issue_type::delete_issue_type_handler;
pub use get_issue_types::get_issue_types_handler;
