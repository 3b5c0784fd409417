use async_trait::async_trait;
use uuid::Uuid;

use crate::issue::domain::entities::{VoteTally, VoteValue};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VoteRepositoryError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage seam for the vote aggregator.
///
/// At most one row exists per (issue, user) — the table's composite
/// primary key enforces it. `upsert_vote` with `Some(value)` is an
/// INSERT .. ON CONFLICT (issue_id, user_id) DO UPDATE, so the second of
/// two concurrent casts overwrites rather than duplicates; `None`
/// deletes the row (deleting an absent row is a no-op).
#[async_trait]
pub trait VoteRepository: Send + Sync {
    async fn upsert_vote(
        &self,
        issue_id: Uuid,
        user_id: Uuid,
        value: Option<VoteValue>,
    ) -> Result<(), VoteRepositoryError>;

    async fn find_vote(
        &self,
        issue_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<VoteValue>, VoteRepositoryError>;

    /// Scan of the issue's vote rows, counted by sign.
    async fn tally(&self, issue_id: Uuid) -> Result<VoteTally, VoteRepositoryError>;
}
