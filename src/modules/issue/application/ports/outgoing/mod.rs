pub mod issue_query;
pub mod issue_repository;
pub mod vote_repository;

pub use issue_query::{IssueFilter, IssueQuery, IssueQueryError};
pub use issue_repository::{
    CreateIssueData, IssuePatch, IssueRepository, IssueRepositoryError,
};
pub use vote_repository::{VoteRepository, VoteRepositoryError};
