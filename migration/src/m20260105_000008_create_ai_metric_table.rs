use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000006_create_ai_job_table::AiJob;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AiMetric::Table)
                    .if_not_exists()
                    .col(pk_uuid(AiMetric::RequestId))
                    .col(big_integer(AiMetric::LatencyMs))
                    .col(string(AiMetric::Outcome))
                    .col(
                        timestamp_with_time_zone(AiMetric::RecordedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ai_metric_request_id")
                            .from(AiMetric::Table, AiMetric::RequestId)
                            .to(AiJob::Table, AiJob::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AiMetric::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AiMetric {
    Table,
    RequestId,
    LatencyMs,
    Outcome,
    RecordedAt,
}
