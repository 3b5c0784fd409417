use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::user_query::UserQuery;

#[derive(Debug, Clone)]
pub enum FetchUserError {
    Forbidden,
    UserNotFound,
    QueryError(String),
}

impl std::fmt::Display for FetchUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchUserError::Forbidden => write!(f, "Not allowed to view this user"),
            FetchUserError::UserNotFound => write!(f, "User not found"),
            FetchUserError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchUserError {}

#[async_trait]
pub trait IFetchUserUseCase: Send + Sync {
    /// `acting` is always the authenticated caller; profiles are visible
    /// to their owner and to administrators.
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        target_user_id: Uuid,
    ) -> Result<User, FetchUserError>;
}

#[derive(Clone)]
pub struct FetchUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchUserUseCase for FetchUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
        target_user_id: Uuid,
    ) -> Result<User, FetchUserError> {
        if acting_user_id != target_user_id && !acting_role.is_admin() {
            return Err(FetchUserError::Forbidden);
        }

        self.query
            .find_by_id(target_user_id)
            .await
            .map_err(|e| FetchUserError::QueryError(e.to_string()))?
            .ok_or(FetchUserError::UserNotFound)
    }
}
