use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_category_table::Category, m20260105_000004_create_deck_table::Deck,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeckCategory::Table)
                    .if_not_exists()
                    .col(uuid(DeckCategory::DeckId))
                    .col(uuid(DeckCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(DeckCategory::DeckId)
                            .col(DeckCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deck_category_deck_id")
                            .from(DeckCategory::Table, DeckCategory::DeckId)
                            .to(Deck::Table, Deck::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deck_category_category_id")
                            .from(DeckCategory::Table, DeckCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeckCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeckCategory {
    Table,
    DeckId,
    CategoryId,
}
