use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::user_query::UserQuery;

#[derive(Debug, Clone)]
pub enum ListUsersError {
    QueryError(String),
}

impl std::fmt::Display for ListUsersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListUsersError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListUsersError {}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
    ) -> Result<Vec<User>, ListUsersError>;
}

/// Administrators see the full directory; a citizen's "list" is just
/// their own row. Not an error for citizens — the reduced view is the
/// feature.
#[derive(Clone)]
pub struct ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
    ) -> Result<Vec<User>, ListUsersError> {
        if acting_role.is_admin() {
            return self
                .query
                .list_users()
                .await
                .map_err(|e| ListUsersError::QueryError(e.to_string()));
        }

        let me = self
            .query
            .find_by_id(acting_user_id)
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))?;

        Ok(me.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::UserQueryError;
    use chrono::Utc;

    struct MockUserQuery {
        users: Vec<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(self.users.iter().find(|u| u.id == user_id).cloned())
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
            Ok(self.users.clone())
        }
    }

    fn test_user(id: Uuid, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: "hash".to_string(),
            full_name: username.to_string(),
            phone: None,
            avatar_url: None,
            date_of_birth: None,
            role: UserRole::Citizen,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_admin_sees_everyone() {
        let users = vec![
            test_user(Uuid::new_v4(), "a"),
            test_user(Uuid::new_v4(), "b"),
            test_user(Uuid::new_v4(), "c"),
        ];
        let uc = ListUsersUseCase::new(MockUserQuery {
            users: users.clone(),
        });

        let listed = uc
            .execute(Uuid::new_v4(), UserRole::Administrator)
            .await
            .unwrap();
        assert_eq!(listed.len(), 3);
    }

    #[tokio::test]
    async fn test_citizen_sees_only_self() {
        let me = test_user(Uuid::new_v4(), "me");
        let uc = ListUsersUseCase::new(MockUserQuery {
            users: vec![me.clone(), test_user(Uuid::new_v4(), "other")],
        });

        let listed = uc.execute(me.id, UserRole::Citizen).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, me.id);
    }
}
