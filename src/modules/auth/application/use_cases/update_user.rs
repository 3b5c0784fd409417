use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::user_repository::{
    UpdateProfileData, UserRepository, UserRepositoryError,
};

/// Partial update payload for `PATCH /api/users/{id}`. Absent fields are
/// left alone. `role` and `is_active` carry extra authorization rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserPayload {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum UpdateUserError {
    Forbidden,
    RoleChangeForbidden,
    ActivationChangeForbidden,
    EmptyFullName,
    InvalidPhone,
    UserNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for UpdateUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateUserError::Forbidden => write!(f, "Not allowed to update this user"),
            UpdateUserError::RoleChangeForbidden => {
                write!(f, "Only administrators can change user roles")
            }
            UpdateUserError::ActivationChangeForbidden => {
                write!(f, "Only administrators can enable or disable accounts")
            }
            UpdateUserError::EmptyFullName => write!(f, "Full name cannot be empty"),
            UpdateUserError::InvalidPhone => write!(f, "Invalid phone number"),
            UpdateUserError::UserNotFound => write!(f, "User not found"),
            UpdateUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateUserError {}

#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        target_user_id: Uuid,
        payload: UpdateUserPayload,
    ) -> Result<User, UpdateUserError>;
}

#[derive(Clone)]
pub struct UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateUserUseCase for UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        target_user_id: Uuid,
        payload: UpdateUserPayload,
    ) -> Result<User, UpdateUserError> {
        if acting_user_id != target_user_id && !acting_role.is_admin() {
            return Err(UpdateUserError::Forbidden);
        }

        // Role and activation changes are admin-only, even on your own account
        if payload.role.is_some() && !acting_role.is_admin() {
            return Err(UpdateUserError::RoleChangeForbidden);
        }

        if payload.is_active.is_some() && !acting_role.is_admin() {
            return Err(UpdateUserError::ActivationChangeForbidden);
        }

        if let Some(full_name) = &payload.full_name {
            if full_name.trim().is_empty() {
                return Err(UpdateUserError::EmptyFullName);
            }
        }

        if let Some(phone) = &payload.phone {
            let re = regex::Regex::new(r"^\+?[0-9]{7,15}$").expect("phone regex is valid");
            if !re.is_match(phone.trim()) {
                return Err(UpdateUserError::InvalidPhone);
            }
        }

        if let Some(role) = payload.role {
            self.repository
                .set_role(target_user_id, role)
                .await
                .map_err(|e| match e {
                    UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                    other => UpdateUserError::RepositoryError(other.to_string()),
                })?;
        }

        if let Some(is_active) = payload.is_active {
            self.repository
                .set_active(target_user_id, is_active)
                .await
                .map_err(|e| match e {
                    UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                    other => UpdateUserError::RepositoryError(other.to_string()),
                })?;
        }

        let data = UpdateProfileData {
            full_name: payload.full_name.map(|s| s.trim().to_string()),
            phone: payload.phone.map(|s| s.trim().to_string()),
            avatar_url: payload.avatar_url,
            date_of_birth: payload.date_of_birth,
        };

        self.repository
            .update_profile(target_user_id, data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })
    }
}
