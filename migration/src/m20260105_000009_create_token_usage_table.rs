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
                    .table(TokenUsage::Table)
                    .if_not_exists()
                    .col(uuid(TokenUsage::UserId))
                    .col(date(TokenUsage::UsageDate))
                    .col(big_integer(TokenUsage::TokensUsed).default(0))
                    .primary_key(
                        Index::create()
                            .col(TokenUsage::UserId)
                            .col(TokenUsage::UsageDate),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_token_usage_user_id")
                            .from(TokenUsage::Table, TokenUsage::UserId)
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
            .drop_table(Table::drop().table(TokenUsage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TokenUsage {
    Table,
    UserId,
    UsageDate,
    TokensUsed,
}
