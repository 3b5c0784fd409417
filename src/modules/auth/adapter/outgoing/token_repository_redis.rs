use crate::modules::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis, Pool};

use std::sync::Arc;

use uuid::Uuid;

/// Redis-backed implementation of `TokenRepository`.
///
/// ## Redis data model
///
/// 1. **Per-token key (authoritative)**
/// ```text
/// auth:blacklist:token:{token_hash} -> "{user_id}"
/// ```
/// - Exists ⇒ token is revoked
/// - TTL = remaining token lifetime
///
/// 2. **Per-user index (helper for bulk revoke)**
/// ```text
/// auth:blacklist:user:{user_id} -> SET(token_hash)
/// ```
///
/// The per-token key is written with `SET NX EX`, a single atomic
/// check-and-set. Its reply (did the key get created?) is what the
/// refresh flow uses to guarantee each refresh token is exchanged at
/// most once, and what lets logout re-blacklist without erroring.
///
/// Redis TTL is the single source of truth for cleanup; nothing sweeps
/// expired entries.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    fn user_key(user_id: Uuid) -> String {
        format!("auth:blacklist:user:{user_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    /// Revoke a single token.
    ///
    /// ## Redis operations
    /// ```text
    /// SET    auth:blacklist:token:{hash} "{user_id}" NX EX <ttl>
    /// SADD   auth:blacklist:user:{user_id} {hash}
    /// EXPIRE auth:blacklist:user:{user_id} <ttl>
    /// ```
    ///
    /// The `SET NX` reply decides the return value: `true` when this call
    /// created the entry, `false` when the token was already revoked. The
    /// user index is best-effort bookkeeping and only touched on a fresh
    /// insert.
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, TokenRepositoryError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            // Token is already past its natural lifetime; signature
            // verification rejects it without our help
            return Err(TokenRepositoryError::InvalidToken);
        }

        let token_key = Self::token_key(&token_hash);
        let user_key = Self::user_key(user_id);

        let mut conn = self.get_conn().await?;

        let created: Option<String> = redis::cmd("SET")
            .arg(&token_key)
            .arg(user_id.to_string())
            .arg("NX")
            .arg("EX")
            .arg(ttl)
            .query_async(&mut *conn)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        let newly_inserted = created.is_some();

        if newly_inserted {
            redis::pipe()
                .atomic()
                .cmd("SADD")
                .arg(&user_key)
                .arg(&token_hash)
                .ignore()
                .cmd("EXPIRE")
                .arg(&user_key)
                .arg(ttl)
                .ignore()
                .query_async::<()>(&mut *conn)
                .await
                .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;
        }

        Ok(newly_inserted)
    }

    /// `EXISTS auth:blacklist:token:{hash}` — O(1).
    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let key = Self::token_key(token_hash);
        let mut conn = self.get_conn().await?;

        let exists: bool = redis::cmd("EXISTS")
            .arg(&key)
            .query_async(&mut *conn)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(exists)
    }

    /// Walk the user's index and delete every tracked token key, then the
    /// index itself. Used when an account is deleted or deactivated.
    async fn revoke_all_user_tokens(&self, user_id: Uuid) -> Result<(), TokenRepositoryError> {
        let user_key = Self::user_key(user_id);
        let mut conn = self.get_conn().await?;

        let hashes: Vec<String> = redis::cmd("SMEMBERS")
            .arg(&user_key)
            .query_async(&mut *conn)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        let mut pipe = redis::pipe();
        pipe.atomic();
        for hash in &hashes {
            pipe.cmd("DEL").arg(Self::token_key(hash)).ignore();
        }
        pipe.cmd("DEL").arg(&user_key).ignore();

        pipe.query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
