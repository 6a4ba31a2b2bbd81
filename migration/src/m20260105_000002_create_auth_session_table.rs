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
                    .table(AuthSession::Table)
                    .if_not_exists()
                    .col(pk_uuid(AuthSession::Id))
                    .col(uuid(AuthSession::UserId))
                    .col(string_uniq(AuthSession::AccessTokenHash))
                    .col(string_uniq(AuthSession::RefreshTokenHash))
                    .col(timestamp_with_time_zone(AuthSession::AccessExpiresAt))
                    .col(timestamp_with_time_zone(AuthSession::RefreshExpiresAt))
                    .col(
                        timestamp_with_time_zone(AuthSession::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auth_session_user_id")
                            .from(AuthSession::Table, AuthSession::UserId)
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
            .drop_table(Table::drop().table(AuthSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuthSession {
    Table,
    Id,
    UserId,
    AccessTokenHash,
    RefreshTokenHash,
    AccessExpiresAt,
    RefreshExpiresAt,
    CreatedAt,
}
