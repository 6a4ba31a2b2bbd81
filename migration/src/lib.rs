pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_auth_session_table;
mod m20260105_000003_create_category_table;
mod m20260105_000004_create_deck_table;
mod m20260105_000005_create_deck_category_table;
mod m20260105_000006_create_ai_job_table;
mod m20260105_000007_create_card_table;
mod m20260105_000008_create_ai_metric_table;
mod m20260105_000009_create_token_usage_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_auth_session_table::Migration),
            Box::new(m20260105_000003_create_category_table::Migration),
            Box::new(m20260105_000004_create_deck_table::Migration),
            Box::new(m20260105_000005_create_deck_category_table::Migration),
            Box::new(m20260105_000006_create_ai_job_table::Migration),
            Box::new(m20260105_000007_create_card_table::Migration),
            Box::new(m20260105_000008_create_ai_metric_table::Migration),
            Box::new(m20260105_000009_create_token_usage_table::Migration),
        ]
    }
}
