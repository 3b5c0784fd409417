use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub enum UserQueryError {
    DatabaseError(String),
}

impl std::fmt::Display for UserQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for UserQueryError {}

/// Read side of the user store.
///
/// `find_by_identifier` is the login lookup: it matches the identifier
/// case-insensitively against username OR email, so "Amina" and
/// "AMINA@Example.com" both resolve. Email comparisons are effectively
/// exact because stored emails are already lowercase.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, UserQueryError>;

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError>;
}
