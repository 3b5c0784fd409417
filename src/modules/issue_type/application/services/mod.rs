pub mod create_issue_type_service;
pub mod delete_issue_type_service;
pub mod get_issue_types_service;

pub use create_issue_type_service::CreateIssueTypeService;
pub use delete_issue_type_service::DeleteIssueTypeService;
pub use get_issue_types_service::GetIssueTypesService;
