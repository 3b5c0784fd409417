pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users_table;
mod m20250901_000002_create_issue_types_table;
mod m20250901_000003_create_issues_table;
mod m20250901_000004_create_issue_attachments_table;
mod m20250901_000005_create_votes_table;
mod m20250901_000006_create_notifications_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users_table::Migration),
            Box::new(m20250901_000002_create_issue_types_table::Migration),
            Box::new(m20250901_000003_create_issues_table::Migration),
            Box::new(m20250901_000004_create_issue_attachments_table::Migration),
            Box::new(m20250901_000005_create_votes_table::Migration),
            Box::new(m20250901_000006_create_notifications_table::Migration),
        ]
    }
}
