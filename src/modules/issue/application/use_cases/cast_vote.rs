use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::issue::application::ports::outgoing::{
    IssueQuery, VoteRepository, VoteRepositoryError,
};
use crate::issue::application::use_cases::vote_summary::VoteSummary;
use crate::issue::domain::entities::{InvalidVoteValue, VoteValue};

//
// ──────────────────────────────────────────────────────────
// Cast Vote Request
// ──────────────────────────────────────────────────────────
//

/// Wire body of `POST /issues/{id}/vote`. Values outside {-1, 0, 1} are
/// rejected during deserialization.
#[derive(Debug, Clone, Copy)]
pub struct CastVoteRequest {
    /// `None` means "clear my vote" (wire value 0).
    value: Option<VoteValue>,
}

impl CastVoteRequest {
    pub fn new(raw: i16) -> Result<Self, InvalidVoteValue> {
        Ok(Self {
            value: VoteValue::from_raw(raw)?,
        })
    }

    pub fn value(&self) -> Option<VoteValue> {
        self.value
    }
}

impl<'de> Deserialize<'de> for CastVoteRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            value: i16,
        }

        let helper = Helper::deserialize(deserializer)?;
        CastVoteRequest::new(helper.value).map_err(serde::de::Error::custom)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CastVoteError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICastVoteUseCase: Send + Sync {
    /// Upsert-with-delete-on-zero, then the fresh summary as seen by the
    /// voter. Switching up→down is a single call, no clear in between.
    async fn execute(
        &self,
        issue_id: Uuid,
        user_id: Uuid,
        request: CastVoteRequest,
    ) -> Result<VoteSummary, CastVoteError>;
}

#[derive(Clone)]
pub struct CastVoteUseCase<Q, V>
where
    Q: IssueQuery + Send + Sync,
    V: VoteRepository + Send + Sync,
{
    issue_query: Q,
    votes: V,
}

impl<Q, V> CastVoteUseCase<Q, V>
where
    Q: IssueQuery + Send + Sync,
    V: VoteRepository + Send + Sync,
{
    pub fn new(issue_query: Q, votes: V) -> Self {
        Self { issue_query, votes }
    }
}

#[async_trait]
impl<Q, V> ICastVoteUseCase for CastVoteUseCase<Q, V>
where
    Q: IssueQuery + Send + Sync,
    V: VoteRepository + Send + Sync,
{
    async fn execute(
        &self,
        issue_id: Uuid,
        user_id: Uuid,
        request: CastVoteRequest,
    ) -> Result<VoteSummary, CastVoteError> {
        self.issue_query
            .find_by_id(issue_id)
            .await
            .map_err(|e| CastVoteError::RepositoryError(e.to_string()))?
            .ok_or(CastVoteError::IssueNotFound)?;

        self.votes
            .upsert_vote(issue_id, user_id, request.value())
            .await
            .map_err(|e| match e {
                // Issue deleted between the check and the write
                VoteRepositoryError::IssueNotFound => CastVoteError::IssueNotFound,
                other => CastVoteError::RepositoryError(other.to_string()),
            })?;

        let tally = self
            .votes
            .tally(issue_id)
            .await
            .map_err(|e| CastVoteError::RepositoryError(e.to_string()))?;

        let my_vote = request.value().map(|v| v.get()).unwrap_or(0);

        Ok(VoteSummary::from_tally(tally, my_vote))
    }
}
