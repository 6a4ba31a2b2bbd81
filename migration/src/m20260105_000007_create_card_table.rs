use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000004_create_deck_table::Deck, m20260105_000006_create_ai_job_table::AiJob};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_uuid(Card::Id))
                    .col(uuid(Card::DeckId))
                    .col(string_len(Card::Question, 200))
                    .col(string_len(Card::Answer, 500))
                    .col(string(Card::Status).default("pending"))
                    .col(text_null(Card::SourceFragment))
                    .col(uuid_null(Card::JobId))
                    .col(timestamp_with_time_zone_null(Card::ReviewStartedAt))
                    .col(timestamp_with_time_zone_null(Card::ReviewFinishedAt))
                    .col(big_integer_null(Card::TimeSpent))
                    .col(
                        timestamp_with_time_zone(Card::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Card::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_deck_id")
                            .from(Card::Table, Card::DeckId)
                            .to(Deck::Table, Deck::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_job_id")
                            .from(Card::Table, Card::JobId)
                            .to(AiJob::Table, AiJob::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_card_deck_id_status")
                    .table(Card::Table)
                    .col(Card::DeckId)
                    .col(Card::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    Id,
    DeckId,
    Question,
    Answer,
    Status,
    SourceFragment,
    JobId,
    ReviewStartedAt,
    ReviewFinishedAt,
    TimeSpent,
    CreatedAt,
    UpdatedAt,
}
