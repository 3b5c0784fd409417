use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create votes table
        //
        // One row per (issue, user). The composite primary key is
        // what makes concurrent casts safe: the second writer hits
        // the key and turns into an update, never a duplicate.
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Votes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Votes::IssueId).uuid().not_null())
                    .col(ColumnDef::new(Votes::UserId).uuid().not_null())
                    .col(ColumnDef::new(Votes::Value).small_integer().not_null())
                    .col(
                        ColumnDef::new(Votes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(Index::create().col(Votes::IssueId).col(Votes::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_issue_id")
                            .from(Votes::Table, Votes::IssueId)
                            .to(Issues::Table, Issues::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_user_id")
                            .from(Votes::Table, Votes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A zero vote is a deleted row, so stored values are only +-1
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE votes
                ADD CONSTRAINT chk_votes_value CHECK (value IN (-1, 1));
                "#,
            )
            .await?;

        // Tally scan: all votes for an issue
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_votes_issue_id
                ON votes (issue_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_votes_issue_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(Votes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Votes {
    Table,
    IssueId,
    UserId,
    Value,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Issues {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
