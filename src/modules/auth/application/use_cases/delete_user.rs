use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_repository::TokenRepository;
use crate::auth::application::ports::outgoing::user_query::UserQuery;
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteUserError {
    Forbidden,
    AdminNotDeletable,
    UserNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteUserError::Forbidden => write!(f, "Not allowed to delete this user"),
            DeleteUserError::AdminNotDeletable => {
                write!(f, "Cannot delete administrator accounts")
            }
            DeleteUserError::UserNotFound => write!(f, "User not found"),
            DeleteUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteUserError {}

#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        target_user_id: Uuid,
    ) -> Result<(), DeleteUserError>;
}

/// Deleting a user is: authorization against the *stored* target row
/// (never the token), best-effort revocation of their refresh tokens,
/// then the hard delete. Issues, votes and notifications cascade at the
/// schema.
#[derive(Clone)]
pub struct DeleteUserUseCase<Q, R, T>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    T: TokenRepository + Send + Sync,
{
    query: Q,
    repository: R,
    token_repository: T,
}

impl<Q, R, T> DeleteUserUseCase<Q, R, T>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    T: TokenRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, token_repository: T) -> Self {
        Self {
            query,
            repository,
            token_repository,
        }
    }
}

#[async_trait]
impl<Q, R, T> IDeleteUserUseCase for DeleteUserUseCase<Q, R, T>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    T: TokenRepository + Send + Sync,
{
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        target_user_id: Uuid,
    ) -> Result<(), DeleteUserError> {
        if acting_user_id != target_user_id && !acting_role.is_admin() {
            return Err(DeleteUserError::Forbidden);
        }

        let target = self
            .query
            .find_by_id(target_user_id)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?
            .ok_or(DeleteUserError::UserNotFound)?;

        // A citizen deleting their own admin-flagged account would be odd,
        // but the stored role is what counts
        if target.role.is_admin() && !acting_role.is_admin() {
            return Err(DeleteUserError::AdminNotDeletable);
        }

        // Sessions first; a failure here shouldn't keep the row alive
        if let Err(e) = self
            .token_repository
            .revoke_all_user_tokens(target_user_id)
            .await
        {
            warn!(user_id = %target_user_id, "Failed to revoke tokens during delete: {}", e);
        }

        self.repository
            .delete_user(target_user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %target_user_id, "User deleted");
        Ok(())
    }
}
