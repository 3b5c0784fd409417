use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IssueTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IssueTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(IssueTypes::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(IssueTypes::SampleForm).text().null())
                    .col(
                        ColumnDef::new(IssueTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is ordered by name
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_issue_types_name
                ON issue_types (name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_issue_types_name;")
            .await?;

        manager
            .drop_table(Table::drop().table(IssueTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum IssueTypes {
    Table,
    Id,
    Name,
    SampleForm,
    CreatedAt,
}
