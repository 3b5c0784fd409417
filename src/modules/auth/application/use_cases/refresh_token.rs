use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::auth::application::ports::outgoing::token_repository::TokenRepository;
use crate::auth::application::ports::outgoing::user_query::UserQuery;
use crate::auth::application::services::hash::hash_token;

// ========================= Refresh Token Request =========================
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone)]
pub enum RefreshTokenRequestError {
    EmptyToken,
}

impl std::fmt::Display for RefreshTokenRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenRequestError::EmptyToken => write!(f, "Refresh token cannot be empty"),
        }
    }
}

impl std::error::Error for RefreshTokenRequestError {}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        if refresh_token.trim().is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.trim().to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl<'de> Deserialize<'de> for RefreshTokenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RefreshTokenRequestHelper {
            refresh_token: String,
        }

        let helper = RefreshTokenRequestHelper::deserialize(deserializer)?;
        RefreshTokenRequest::new(helper.refresh_token).map_err(serde::de::Error::custom)
    }
}

// ====================== Refresh Token Error =============================
#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    TokenExpired,
    TokenInvalid,
    InvalidTokenType,
    InvalidSignature,
    /// The presented refresh token was already exchanged (or explicitly
    /// revoked). Single-use: the first exchange wins, every later attempt
    /// lands here.
    AlreadyUsed,
    /// The bound user no longer exists or has been deactivated.
    UserInactive,
    TokenGenerationFailed(String),
    StorageError(String),
}

impl std::fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenError::TokenExpired => write!(f, "Refresh token has expired"),
            RefreshTokenError::TokenInvalid => write!(f, "Invalid refresh token"),
            RefreshTokenError::InvalidTokenType => write!(f, "Invalid token type"),
            RefreshTokenError::InvalidSignature => write!(f, "Invalid token signature"),
            RefreshTokenError::AlreadyUsed => write!(f, "Refresh token has already been used"),
            RefreshTokenError::UserInactive => write!(f, "User account is disabled"),
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RefreshTokenError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for RefreshTokenError {}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::TokenNotYetValid => RefreshTokenError::TokenInvalid,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::InvalidSignature => RefreshTokenError::InvalidSignature,
            TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
        }
    }
}

// ============================ Refresh Token Response =========================
#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

// ============================ Refresh Token Use Case =============================
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

/// Refresh = verify, then *consume*, then mint.
///
/// Every successful call permanently retires the presented refresh token
/// by writing its hash to the blacklist; the new pair carries the user's
/// current role, so a promotion or demotion propagates at the next
/// rotation.
#[derive(Clone)]
pub struct RefreshTokenUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: TokenRepository + Send + Sync,
{
    query: Q,
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RefreshTokenUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: TokenRepository + Send + Sync,
{
    pub fn new(query: Q, token_repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRefreshTokenUseCase for RefreshTokenUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: TokenRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        // 1️⃣ **Verify signature and expiry**
        let claims = self
            .token_provider
            .verify_token(request.refresh_token())
            .map_err(RefreshTokenError::from)?;

        // 2️⃣ **Only refresh tokens can be exchanged**
        if claims.token_type != "refresh" {
            return Err(RefreshTokenError::InvalidTokenType);
        }

        // 3️⃣ **Early revocation check** — cheap rejection for the common
        // replay case before touching the user table
        let token_hash = hash_token(request.refresh_token());

        let revoked = self
            .token_repository
            .is_token_blacklisted(&token_hash)
            .await
            .map_err(|e| RefreshTokenError::StorageError(e.to_string()))?;

        if revoked {
            warn!(user_id = %claims.sub, "Replay of a spent refresh token");
            return Err(RefreshTokenError::AlreadyUsed);
        }

        // 4️⃣ **The bound user must still exist and be active**
        let user = self
            .query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| RefreshTokenError::StorageError(e.to_string()))?
            .filter(|u| u.is_active)
            .ok_or(RefreshTokenError::UserInactive)?;

        // 5️⃣ **Consume the presented token** — the set-if-absent is the
        // race gate: of two concurrent exchanges exactly one inserts the
        // hash, the other sees `false` and fails
        let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0)
            .unwrap_or_else(|| chrono::Utc::now() + chrono::Duration::days(7));

        let newly_revoked = self
            .token_repository
            .blacklist_token(token_hash, claims.sub, expires_at)
            .await
            .map_err(|e| RefreshTokenError::StorageError(e.to_string()))?;

        if !newly_revoked {
            warn!(user_id = %claims.sub, "Lost refresh race, token already consumed");
            return Err(RefreshTokenError::AlreadyUsed);
        }

        debug!(user_id = %claims.sub, "Refresh token consumed, rotating pair");

        // 6️⃣ **Mint the fresh pair with the user's current role**
        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.role)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshTokenResponse {
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::domain::entities::{User, UserRole};
    use crate::auth::application::ports::outgoing::token_repository::TokenRepositoryError;
    use crate::auth::application::ports::outgoing::UserQueryError;
    use chrono::{DateTime, Utc};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use uuid::Uuid;

    // In-memory blacklist with real set-if-absent semantics
    #[derive(Default)]
    struct MemoryTokenRepository {
        hashes: Arc<Mutex<HashSet<String>>>,
        should_fail: bool,
    }

    impl Clone for MemoryTokenRepository {
        fn clone(&self) -> Self {
            Self {
                hashes: Arc::clone(&self.hashes),
                should_fail: self.should_fail,
            }
        }
    }

    #[async_trait]
    impl TokenRepository for MemoryTokenRepository {
        async fn blacklist_token(
            &self,
            token_hash: String,
            _user_id: Uuid,
            _expires_at: DateTime<Utc>,
        ) -> Result<bool, TokenRepositoryError> {
            if self.should_fail {
                return Err(TokenRepositoryError::DatabaseError(
                    "Connection failed".to_string(),
                ));
            }
            Ok(self.hashes.lock().unwrap().insert(token_hash))
        }

        async fn is_token_blacklisted(
            &self,
            token_hash: &str,
        ) -> Result<bool, TokenRepositoryError> {
            Ok(self.hashes.lock().unwrap().contains(token_hash))
        }

        async fn revoke_all_user_tokens(&self, _user_id: Uuid) -> Result<(), TokenRepositoryError> {
            Ok(())
        }
    }

    struct MockUserQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone().filter(|u| u.id == user_id))
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_identifier(
            &self,
            _identifier: &str,
        ) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
            Ok(vec![])
        }
    }

    fn create_jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_min_32_characters_long".to_string(),
            issuer: "testapp".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
        })
    }

    fn create_test_user(id: Uuid, is_active: bool) -> User {
        User {
            id,
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            full_name: "Test User".to_string(),
            phone: None,
            avatar_url: None,
            date_of_birth: None,
            role: UserRole::Citizen,
            is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // ==================== RefreshTokenRequest Tests ====================
    #[test]
    fn test_refresh_token_request_trimmed() {
        let request = RefreshTokenRequest::new("  token_123  ".to_string()).unwrap();
        assert_eq!(request.refresh_token(), "token_123");
    }

    #[test]
    fn test_refresh_token_request_empty() {
        let result = RefreshTokenRequest::new("   ".to_string());
        assert!(matches!(result, Err(RefreshTokenRequestError::EmptyToken)));
    }

    // ==================== RefreshTokenUseCase Tests ====================

    #[tokio::test]
    async fn test_refresh_rotates_pair() {
        let jwt_service = create_jwt_service();
        let user_id = Uuid::new_v4();
        let original = jwt_service
            .generate_refresh_token(user_id, UserRole::Citizen)
            .unwrap();

        let use_case = RefreshTokenUseCase::new(
            MockUserQuery {
                user: Some(create_test_user(user_id, true)),
            },
            MemoryTokenRepository::default(),
            Arc::new(jwt_service),
        );

        let request = RefreshTokenRequest::new(original.clone()).unwrap();
        let response = use_case.execute(request).await.unwrap();

        assert!(!response.access_token.is_empty());
        assert!(!response.refresh_token.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_is_single_use() {
        let jwt_service = create_jwt_service();
        let user_id = Uuid::new_v4();
        let original = jwt_service
            .generate_refresh_token(user_id, UserRole::Citizen)
            .unwrap();

        let use_case = RefreshTokenUseCase::new(
            MockUserQuery {
                user: Some(create_test_user(user_id, true)),
            },
            MemoryTokenRepository::default(),
            Arc::new(jwt_service),
        );

        // First exchange succeeds
        let request = RefreshTokenRequest::new(original.clone()).unwrap();
        assert!(use_case.execute(request).await.is_ok());

        // Replaying the same token fails
        let request = RefreshTokenRequest::new(original).unwrap();
        let result = use_case.execute(request).await;
        assert!(
            matches!(result, Err(RefreshTokenError::AlreadyUsed)),
            "Expected AlreadyUsed, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_refresh_concurrent_exchanges_single_winner() {
        let jwt_service = create_jwt_service();
        let user_id = Uuid::new_v4();
        let original = jwt_service
            .generate_refresh_token(user_id, UserRole::Citizen)
            .unwrap();

        let repo = MemoryTokenRepository::default();
        let use_case = Arc::new(RefreshTokenUseCase::new(
            MockUserQuery {
                user: Some(create_test_user(user_id, true)),
            },
            repo,
            Arc::new(jwt_service),
        ));

        let a = {
            let uc = Arc::clone(&use_case);
            let token = original.clone();
            tokio::spawn(
                async move { uc.execute(RefreshTokenRequest::new(token).unwrap()).await },
            )
        };
        let b = {
            let uc = Arc::clone(&use_case);
            let token = original.clone();
            tokio::spawn(
                async move { uc.execute(RefreshTokenRequest::new(token).unwrap()).await },
            )
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let winners = results.iter().filter(|r| r.is_ok()).count();

        // The set-if-absent gate lets at most one exchange through
        assert!(winners <= 1, "Both concurrent exchanges succeeded");
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let jwt_service = create_jwt_service();
        let user_id = Uuid::new_v4();
        let access_token = jwt_service
            .generate_access_token(user_id, UserRole::Citizen)
            .unwrap();

        let use_case = RefreshTokenUseCase::new(
            MockUserQuery {
                user: Some(create_test_user(user_id, true)),
            },
            MemoryTokenRepository::default(),
            Arc::new(jwt_service),
        );

        let request = RefreshTokenRequest::new(access_token).unwrap();
        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(RefreshTokenError::InvalidTokenType)));
    }

    #[tokio::test]
    async fn test_refresh_expired_token() {
        let expired_service = JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_min_32_characters_long".to_string(),
            issuer: "testapp".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: -60,
        });

        let user_id = Uuid::new_v4();
        let expired = expired_service
            .generate_refresh_token(user_id, UserRole::Citizen)
            .unwrap();

        let use_case = RefreshTokenUseCase::new(
            MockUserQuery {
                user: Some(create_test_user(user_id, true)),
            },
            MemoryTokenRepository::default(),
            Arc::new(create_jwt_service()),
        );

        let request = RefreshTokenRequest::new(expired).unwrap();
        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(RefreshTokenError::TokenExpired)));
    }

    #[tokio::test]
    async fn test_refresh_deactivated_user() {
        let jwt_service = create_jwt_service();
        let user_id = Uuid::new_v4();
        let token = jwt_service
            .generate_refresh_token(user_id, UserRole::Citizen)
            .unwrap();

        let use_case = RefreshTokenUseCase::new(
            MockUserQuery {
                user: Some(create_test_user(user_id, false)),
            },
            MemoryTokenRepository::default(),
            Arc::new(jwt_service),
        );

        let request = RefreshTokenRequest::new(token).unwrap();
        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(RefreshTokenError::UserInactive)));
    }

    #[tokio::test]
    async fn test_refresh_deleted_user() {
        let jwt_service = create_jwt_service();
        let user_id = Uuid::new_v4();
        let token = jwt_service
            .generate_refresh_token(user_id, UserRole::Citizen)
            .unwrap();

        let use_case = RefreshTokenUseCase::new(
            MockUserQuery { user: None },
            MemoryTokenRepository::default(),
            Arc::new(jwt_service),
        );

        let request = RefreshTokenRequest::new(token).unwrap();
        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(RefreshTokenError::UserInactive)));
    }

    #[tokio::test]
    async fn test_refresh_invalid_signature() {
        let other_service = JwtTokenService::new(JwtConfig {
            secret_key: "secret_one_min_32_characters_long_key".to_string(),
            issuer: "testapp".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
        });

        let user_id = Uuid::new_v4();
        let token = other_service
            .generate_refresh_token(user_id, UserRole::Citizen)
            .unwrap();

        let use_case = RefreshTokenUseCase::new(
            MockUserQuery {
                user: Some(create_test_user(user_id, true)),
            },
            MemoryTokenRepository::default(),
            Arc::new(create_jwt_service()),
        );

        let request = RefreshTokenRequest::new(token).unwrap();
        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(RefreshTokenError::InvalidSignature)));
    }

    #[tokio::test]
    async fn test_refresh_storage_failure() {
        let jwt_service = create_jwt_service();
        let user_id = Uuid::new_v4();
        let token = jwt_service
            .generate_refresh_token(user_id, UserRole::Citizen)
            .unwrap();

        let repo = MemoryTokenRepository {
            hashes: Arc::new(Mutex::new(HashSet::new())),
            should_fail: true,
        };

        let use_case = RefreshTokenUseCase::new(
            MockUserQuery {
                user: Some(create_test_user(user_id, true)),
            },
            repo,
            Arc::new(jwt_service),
        );

        let request = RefreshTokenRequest::new(token).unwrap();
        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(RefreshTokenError::StorageError(_))));
    }
}
