pub mod issue_type_repository;

pub use issue_type_repository::{
    CreateIssueTypeData, IssueTypeRepository, IssueTypeRepositoryError,
};
