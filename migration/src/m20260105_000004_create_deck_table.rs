use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deck::Table)
                    .if_not_exists()
                    .col(pk_uuid(Deck::Id))
                    .col(uuid(Deck::UserId))
                    .col(string(Deck::Name))
                    .col(text_null(Deck::Description))
                    .col(integer_null(Deck::CardLimit))
                    .col(
                        timestamp_with_time_zone(Deck::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Deck::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deck_user_id")
                            .from(Deck::Table, Deck::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_deck_user_id")
                    .table(Deck::Table)
                    .col(Deck::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deck::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Deck {
    Table,
    Id,
    UserId,
    Name,
    Description,
    CardLimit,
    CreatedAt,
    UpdatedAt,
}
