use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use super::user_repository_postgres::UserRepositoryPostgres;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(UserRepositoryPostgres::map_to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        // Stored emails are lowercase, so an exact match on the lowered
        // input is already case-insensitive
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email.to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(UserRepositoryPostgres::map_to_user))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(UserRepositoryPostgres::map_to_user))
    }

    /// Login lookup: LOWER(username) = LOWER($1) OR email = LOWER($1),
    /// backed by the LOWER() indexes from the users migration.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, UserQueryError> {
        let lowered = identifier.to_lowercase();

        let user = UserEntity::find()
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(UserColumn::Username)))
                            .eq(lowered.clone()),
                    )
                    .add(UserColumn::Email.eq(lowered)),
            )
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(UserRepositoryPostgres::map_to_user))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .order_by_desc(UserColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(users
            .into_iter()
            .map(UserRepositoryPostgres::map_to_user)
            .collect())
    }
}
