use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::issue::application::ports::outgoing::{IssueQuery, VoteRepository};
use crate::issue::domain::entities::VoteTally;

/// The denormalized tally handed to clients.
///
/// `my_vote` is 0 for anonymous callers and for users who have not
/// voted; otherwise it is the caller's stored -1/+1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteSummary {
    pub up_count: u64,
    pub down_count: u64,
    pub score: i64,
    pub my_vote: i16,
}

impl VoteSummary {
    pub fn from_tally(tally: VoteTally, my_vote: i16) -> Self {
        Self {
            up_count: tally.up_count,
            down_count: tally.down_count,
            score: tally.score(),
            my_vote,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VoteSummaryError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IVoteSummaryUseCase: Send + Sync {
    async fn execute(
        &self,
        issue_id: Uuid,
        requesting_user: Option<Uuid>,
    ) -> Result<VoteSummary, VoteSummaryError>;
}

#[derive(Clone)]
pub struct VoteSummaryUseCase<Q, V>
where
    Q: IssueQuery + Send + Sync,
    V: VoteRepository + Send + Sync,
{
    issue_query: Q,
    votes: V,
}

impl<Q, V> VoteSummaryUseCase<Q, V>
where
    Q: IssueQuery + Send + Sync,
    V: VoteRepository + Send + Sync,
{
    pub fn new(issue_query: Q, votes: V) -> Self {
        Self { issue_query, votes }
    }
}

#[async_trait]
impl<Q, V> IVoteSummaryUseCase for VoteSummaryUseCase<Q, V>
where
    Q: IssueQuery + Send + Sync,
    V: VoteRepository + Send + Sync,
{
    async fn execute(
        &self,
        issue_id: Uuid,
        requesting_user: Option<Uuid>,
    ) -> Result<VoteSummary, VoteSummaryError> {
        // Summaries 404 on missing issues instead of reporting zeros
        self.issue_query
            .find_by_id(issue_id)
            .await
            .map_err(|e| VoteSummaryError::RepositoryError(e.to_string()))?
            .ok_or(VoteSummaryError::IssueNotFound)?;

        let tally = self
            .votes
            .tally(issue_id)
            .await
            .map_err(|e| VoteSummaryError::RepositoryError(e.to_string()))?;

        let my_vote = match requesting_user {
            Some(user_id) => self
                .votes
                .find_vote(issue_id, user_id)
                .await
                .map_err(|e| VoteSummaryError::RepositoryError(e.to_string()))?
                .map(|v| v.get())
                .unwrap_or(0),
            None => 0,
        };

        Ok(VoteSummary::from_tally(tally, my_vote))
    }
}
