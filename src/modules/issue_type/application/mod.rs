pub mod domain;
pub mod issue_type_use_cases;
pub mod ports;
pub mod services;

pub use issue_type_use_cases::IssueTypeUseCases;
