pub mod create_issue_type_use_case;
pub mod delete_issue_type_use_case;
pub mod get_issue_types_use_case;

pub use create_issue_type_use_case::{
    CreateIssueTypeCommand, CreateIssueTypeCommandError, CreateIssueTypeError,
    CreateIssueTypeUseCase,
};
pub use delete_issue_type_use_case::{DeleteIssueTypeError, DeleteIssueTypeUseCase};
pub use get_issue_types_use_case::{GetIssueTypesError, GetIssueTypesUseCase};
