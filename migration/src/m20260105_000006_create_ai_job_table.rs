use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_user_table::User, m20260105_000004_create_deck_table::Deck};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AiJob::Table)
                    .if_not_exists()
                    .col(pk_uuid(AiJob::Id))
                    .col(uuid(AiJob::DeckId))
                    .col(uuid(AiJob::UserId))
                    .col(text(AiJob::InputText))
                    .col(integer(AiJob::RequestedCardCount))
                    .col(integer_null(AiJob::ActualCardCount))
                    .col(string(AiJob::Status))
                    .col(string(AiJob::Model))
                    .col(integer_null(AiJob::TokensUsed))
                    .col(text_null(AiJob::ErrorMessage))
                    .col(timestamp_with_time_zone_null(AiJob::StartedAt))
                    .col(timestamp_with_time_zone_null(AiJob::FinishedAt))
                    .col(
                        timestamp_with_time_zone(AiJob::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ai_job_deck_id")
                            .from(AiJob::Table, AiJob::DeckId)
                            .to(Deck::Table, Deck::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ai_job_user_id")
                            .from(AiJob::Table, AiJob::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AiJob::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AiJob {
    Table,
    Id,
    DeckId,
    UserId,
    InputText,
    RequestedCardCount,
    ActualCardCount,
    Status,
    Model,
    TokensUsed,
    ErrorMessage,
    StartedAt,
    FinishedAt,
    CreatedAt,
}
