use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{user_query::UserQuery, PasswordHasher, TokenProvider};

// ========================= Login Request =========================
/// Validated login request. The identifier is either a username or an
/// email address; resolution is case-insensitive on both.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    identifier: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyIdentifier,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyIdentifier => {
                write!(f, "Username or email cannot be empty")
            }
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(identifier: String, password: String) -> Result<Self, LoginRequestError> {
        let identifier = identifier.trim().to_string();

        if identifier.is_empty() {
            return Err(LoginRequestError::EmptyIdentifier);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            identifier,
            password,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            identifier: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.identifier, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum LoginError {
    /// Covers both "no such user" and "wrong password" so responses
    /// cannot be used to probe which identifiers exist.
    InvalidCredentials,
    AccountDisabled,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid username/email or password"),
            LoginError::AccountDisabled => write!(f, "User account is disabled"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // 1️⃣ **Resolve identifier** (username OR email, case-insensitive)
        let user = self
            .query
            .find_by_identifier(request.identifier())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // 2️⃣ **Verify password** before revealing anything about the account
        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // 3️⃣ **Disabled accounts stay out, even with correct credentials**
        if !user.is_active {
            return Err(LoginError::AccountDisabled);
        }

        // 4️⃣ **Generate tokens**
        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            user,
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::outgoing::{HashError, UserQueryError};
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    // Mock UserQuery resolving a single user by username or email
    #[derive(Default)]
    struct MockUserQuery {
        user: Option<User>,
        should_fail: bool,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_identifier(
            &self,
            identifier: &str,
        ) -> Result<Option<User>, UserQueryError> {
            if self.should_fail {
                return Err(UserQueryError::DatabaseError("Database error".to_string()));
            }

            if let Some(user) = &self.user {
                let ident = identifier.to_lowercase();
                if user.username.to_lowercase() == ident || user.email == ident {
                    return Ok(Some(user.clone()));
                }
            }
            Ok(None)
        }

        async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
            Ok(vec![])
        }
    }

    struct MockPasswordHasher {
        should_verify: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("hashed_password".to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.should_verify)
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

    fn create_test_user(is_active: bool) -> User {
        User {
            id: Uuid::new_v4(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
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

    fn use_case(query: MockUserQuery, verify: bool) -> LoginUserUseCase<MockUserQuery> {
        LoginUserUseCase::new(
            query,
            Arc::new(MockPasswordHasher {
                should_verify: verify,
            }),
            Arc::new(create_jwt_service()),
        )
    }

    // ==================== LoginRequest Tests ====================
    #[test]
    fn test_login_request_trims_identifier() {
        let request =
            LoginRequest::new("  testuser  ".to_string(), "password123".to_string()).unwrap();
        assert_eq!(request.identifier(), "testuser");
    }

    #[test]
    fn test_login_request_empty_identifier() {
        let result = LoginRequest::new("   ".to_string(), "password123".to_string());
        assert!(matches!(result, Err(LoginRequestError::EmptyIdentifier)));
    }

    #[test]
    fn test_login_request_empty_password() {
        let result = LoginRequest::new("testuser".to_string(), "".to_string());
        assert!(matches!(result, Err(LoginRequestError::EmptyPassword)));
    }

    #[test]
    fn test_login_request_deserialize_valid() {
        let json = json!({
            "identifier": "test@example.com",
            "password": "password123"
        });

        let request: LoginRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.identifier(), "test@example.com");
    }

    #[test]
    fn test_login_request_deserialize_empty_identifier() {
        let json = json!({
            "identifier": "",
            "password": "password123"
        });

        let result: Result<LoginRequest, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    // ==================== LoginUserUseCase Tests ====================

    #[tokio::test]
    async fn test_login_by_username() {
        let uc = use_case(
            MockUserQuery {
                user: Some(create_test_user(true)),
                should_fail: false,
            },
            true,
        );

        let request =
            LoginRequest::new("testuser".to_string(), "password123".to_string()).unwrap();
        let response = uc.execute(request).await.unwrap();

        assert!(!response.access_token.is_empty());
        assert!(!response.refresh_token.is_empty());
        assert_eq!(response.user.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_login_by_email_any_case() {
        let uc = use_case(
            MockUserQuery {
                user: Some(create_test_user(true)),
                should_fail: false,
            },
            true,
        );

        let request =
            LoginRequest::new("Test@Example.COM".to_string(), "password123".to_string()).unwrap();
        let result = uc.execute(request).await;

        assert!(result.is_ok(), "Expected case-insensitive email login");
    }

    #[tokio::test]
    async fn test_login_unknown_identifier_and_wrong_password_are_identical() {
        // Unknown user
        let uc = use_case(MockUserQuery::default(), true);
        let request =
            LoginRequest::new("ghost".to_string(), "password123".to_string()).unwrap();
        let unknown = uc.execute(request).await.unwrap_err();

        // Known user, wrong password
        let uc = use_case(
            MockUserQuery {
                user: Some(create_test_user(true)),
                should_fail: false,
            },
            false,
        );
        let request =
            LoginRequest::new("testuser".to_string(), "wrongpass1".to_string()).unwrap();
        let wrong = uc.execute(request).await.unwrap_err();

        // Same variant, same message: nothing to enumerate accounts with
        assert!(matches!(unknown, LoginError::InvalidCredentials));
        assert!(matches!(wrong, LoginError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn test_login_disabled_account_with_correct_password() {
        let uc = use_case(
            MockUserQuery {
                user: Some(create_test_user(false)),
                should_fail: false,
            },
            true,
        );

        let request =
            LoginRequest::new("testuser".to_string(), "password123".to_string()).unwrap();
        let result = uc.execute(request).await;

        assert!(
            matches!(result, Err(LoginError::AccountDisabled)),
            "Expected AccountDisabled, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_login_query_error() {
        let uc = use_case(
            MockUserQuery {
                user: None,
                should_fail: true,
            },
            true,
        );

        let request =
            LoginRequest::new("testuser".to_string(), "password123".to_string()).unwrap();
        let result = uc.execute(request).await;

        assert!(matches!(result, Err(LoginError::QueryError(_))));
    }
}
