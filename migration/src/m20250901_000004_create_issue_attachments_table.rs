use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IssueAttachments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IssueAttachments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IssueAttachments::IssueId).uuid().not_null())
                    .col(
                        ColumnDef::new(IssueAttachments::ObjectName)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IssueAttachments::ContentType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IssueAttachments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Attachments live and die with their issue
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_attachments_issue_id")
                            .from(IssueAttachments::Table, IssueAttachments::IssueId)
                            .to(Issues::Table, Issues::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_issue_attachments_issue_id
                ON issue_attachments (issue_id, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_issue_attachments_issue_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(IssueAttachments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum IssueAttachments {
    Table,
    Id,
    IssueId,
    ObjectName,
    ContentType,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Issues {
    Table,
    Id,
}
