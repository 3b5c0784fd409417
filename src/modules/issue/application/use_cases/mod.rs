pub mod cast_vote;
pub mod close_issue;
pub mod create_issue;
pub mod delete_issue;
pub mod fetch_issue;
pub mod list_issues;
pub mod patch_issue;
pub mod vote_summary;
