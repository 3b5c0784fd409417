use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};
use crate::auth::application::ports::outgoing::{
    user_query::UserQuery, user_repository::UserRepository, PasswordHasher,
};

// ========================= Change Password Request =========================
/// Validated password change. Matching and strength are enforced here;
/// the current-password check needs the stored hash and happens in the
/// use case.
#[derive(Debug, Clone)]
pub struct ChangePasswordRequest {
    old_password: String,
    new_password: String,
}

#[derive(Debug, Clone)]
pub enum ChangePasswordRequestError {
    EmptyOldPassword,
    PasswordMismatch,
    WeakPassword(PasswordPolicyError),
}

impl std::fmt::Display for ChangePasswordRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangePasswordRequestError::EmptyOldPassword => {
                write!(f, "Current password cannot be empty")
            }
            ChangePasswordRequestError::PasswordMismatch => {
                write!(f, "Password fields didn't match")
            }
            ChangePasswordRequestError::WeakPassword(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChangePasswordRequestError {}

impl ChangePasswordRequest {
    pub fn new(
        old_password: String,
        new_password: String,
        confirm_password: String,
        policy: &dyn PasswordPolicy,
    ) -> Result<Self, ChangePasswordRequestError> {
        if old_password.is_empty() {
            return Err(ChangePasswordRequestError::EmptyOldPassword);
        }

        if new_password != confirm_password {
            return Err(ChangePasswordRequestError::PasswordMismatch);
        }

        policy
            .validate(&new_password)
            .map_err(ChangePasswordRequestError::WeakPassword)?;

        Ok(Self {
            old_password,
            new_password,
        })
    }

    pub fn old_password(&self) -> &str {
        &self.old_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

/// Wire shape; validated into a `ChangePasswordRequest` by the use case.
#[derive(Debug, Clone)]
pub struct ChangePasswordPayload {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl<'de> Deserialize<'de> for ChangePasswordPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            old_password: String,
            new_password: String,
            confirm_password: String,
        }

        let helper = Helper::deserialize(deserializer)?;
        Ok(ChangePasswordPayload {
            old_password: helper.old_password,
            new_password: helper.new_password,
            confirm_password: helper.confirm_password,
        })
    }
}

// ====================== Change Password Error =============================
#[derive(Debug, Clone)]
pub enum ChangePasswordError {
    InvalidRequest(ChangePasswordRequestError),
    WrongOldPassword,
    UserNotFound,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for ChangePasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangePasswordError::InvalidRequest(e) => write!(f, "{}", e),
            ChangePasswordError::WrongOldPassword => write!(f, "Wrong password"),
            ChangePasswordError::UserNotFound => write!(f, "User not found"),
            ChangePasswordError::HashingFailed(msg) => {
                write!(f, "Password hashing failed: {}", msg)
            }
            ChangePasswordError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ChangePasswordError {}

// ============================ Change Password Use Case =============================
#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        payload: ChangePasswordPayload,
    ) -> Result<(), ChangePasswordError>;
}

/// Existing sessions stay valid after the change; only the credential
/// rotates.
#[derive(Clone)]
pub struct ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R> ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<Q, R> IChangePasswordUseCase for ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        payload: ChangePasswordPayload,
    ) -> Result<(), ChangePasswordError> {
        let request = ChangePasswordRequest::new(
            payload.old_password,
            payload.new_password,
            payload.confirm_password,
            self.password_policy.as_ref(),
        )
        .map_err(ChangePasswordError::InvalidRequest)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let old_matches = self
            .password_hasher
            .verify_password(request.old_password(), &user.password_hash)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        if !old_matches {
            return Err(ChangePasswordError::WrongOldPassword);
        }

        let new_hash = self
            .password_hasher
            .hash_password(request.new_password())
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(user_id, new_hash)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?;

        Ok(())
    }
}
