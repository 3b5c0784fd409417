use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::issue::application::ports::outgoing::{VoteRepository, VoteRepositoryError};
use crate::issue::domain::entities::{VoteTally, VoteValue};

use super::sea_orm_entity::votes::{
    ActiveModel as VoteActiveModel, Column as VoteColumn, Entity as VoteEntity,
};

/// Postgres-backed vote store.
///
/// The `(issue_id, user_id)` composite primary key plus
/// `ON CONFLICT .. DO UPDATE` makes a cast a true atomic upsert: two
/// concurrent casts for the same pair end as one row holding whichever
/// write landed second, never two rows and never an error surfaced to a
/// voter.
#[derive(Clone, Debug)]
pub struct VoteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VoteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_error(e: sea_orm::DbErr) -> VoteRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("fk_votes_issue_id") {
            return VoteRepositoryError::IssueNotFound;
        }
        VoteRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl VoteRepository for VoteRepositoryPostgres {
    async fn upsert_vote(
        &self,
        issue_id: Uuid,
        user_id: Uuid,
        value: Option<VoteValue>,
    ) -> Result<(), VoteRepositoryError> {
        match value {
            Some(vote) => {
                let active = VoteActiveModel {
                    issue_id: Set(issue_id),
                    user_id: Set(user_id),
                    value: Set(vote.get()),
                    created_at: NotSet,
                };

                VoteEntity::insert(active)
                    .on_conflict(
                        OnConflict::columns([VoteColumn::IssueId, VoteColumn::UserId])
                            .update_column(VoteColumn::Value)
                            .to_owned(),
                    )
                    .exec(&*self.db)
                    .await
                    .map_err(Self::map_db_error)?;
            }
            None => {
                // Clearing an absent vote deletes zero rows, which is fine
                VoteEntity::delete_many()
                    .filter(VoteColumn::IssueId.eq(issue_id))
                    .filter(VoteColumn::UserId.eq(user_id))
                    .exec(&*self.db)
                    .await
                    .map_err(Self::map_db_error)?;
            }
        }

        Ok(())
    }

    async fn find_vote(
        &self,
        issue_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<VoteValue>, VoteRepositoryError> {
        let model = VoteEntity::find_by_id((issue_id, user_id))
            .one(&*self.db)
            .await
            .map_err(|e| VoteRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.and_then(|m| VoteValue::from_raw(m.value).ok().flatten()))
    }

    async fn tally(&self, issue_id: Uuid) -> Result<VoteTally, VoteRepositoryError> {
        let rows = VoteEntity::find()
            .filter(VoteColumn::IssueId.eq(issue_id))
            .all(&*self.db)
            .await
            .map_err(|e| VoteRepositoryError::DatabaseError(e.to_string()))?;

        let up_count = rows.iter().filter(|r| r.value > 0).count() as u64;
        let down_count = rows.iter().filter(|r| r.value < 0).count() as u64;

        Ok(VoteTally {
            up_count,
            down_count,
        })
    }
}
