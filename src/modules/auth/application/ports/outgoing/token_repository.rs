use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum TokenRepositoryError {
    InvalidToken,
    DatabaseError(String),
}

impl std::fmt::Display for TokenRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenRepositoryError::InvalidToken => write!(f, "Token is already expired"),
            TokenRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for TokenRepositoryError {}

/// Persisted revocation set for refresh tokens.
///
/// Tokens are stored as SHA-256 hashes and expire with the token's own
/// lifetime, so the set never needs manual cleanup.
///
/// `blacklist_token` is an atomic set-if-absent and reports whether the
/// hash was newly inserted:
/// - logout ignores the flag (blacklisting twice is a no-op, never an
///   error, which keeps logout safe to race with refresh)
/// - refresh treats `false` as "this token was already spent" and fails
///   the rotation, which is what makes refresh tokens single-use even
///   under concurrent requests
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, TokenRepositoryError>;

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;

    async fn revoke_all_user_tokens(&self, user_id: Uuid) -> Result<(), TokenRepositoryError>;
}
