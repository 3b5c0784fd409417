pub mod cast_vote;
pub mod close_issue;
pub mod create_issue;
pub mod delete_issue;
pub mod get_issues;
pub mod get_single_issue;
pub mod patch_issue;
pub mod vote_summary;

pub use cast_vote::cast_vote_handler;
pub use close_issue::close_issue_handler;
pub use create_issue::create_issue_handler;
pub use delete_issue::delete_issue_handler;
pub use get_issues::get_issues_handler;
pub use get_single_issue::get_single_issue_handler;
pub use patch_issue::patch_issue_handler;
pub use vote_summary::vote_summary_handler;

use serde::Serialize;

use crate::issue::domain::entities::Issue;

/// Wire representation of an issue.
#[derive(Debug, Clone, Serialize)]
pub struct IssueDto {
    pub id: String,
    pub user_id: String,
    pub issue_type_id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
    pub closed_at: Option<String>,
}

impl From<Issue> for IssueDto {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id.to_string(),
            user_id: issue.user_id.to_string(),
            issue_type_id: issue.issue_type_id.to_string(),
            title: issue.title,
            description: issue.description,
            status: issue.status.as_str().to_string(),
            priority: issue.priority.as_str().to_string(),
            latitude: issue.location.map(|l| l.latitude()),
            longitude: issue.location.map(|l| l.longitude()),
            created_at: issue.created_at.to_rfc3339(),
            updated_at: issue.updated_at.to_rfc3339(),
            closed_at: issue.closed_at.map(|t| t.to_rfc3339()),
        }
    }
}
