use chrono::NaiveDate;
use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::usage::TokenUsage;

pub struct TokenUsageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TokenUsageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds `tokens` to the user's total for `date`, creating the row if needed.
    pub async fn add(&self, user_id: Uuid, date: NaiveDate, tokens: i64) -> Result<(), DbErr> {
        entity::prelude::TokenUsage::insert(entity::token_usage::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            usage_date: ActiveValue::Set(date),
            tokens_used: ActiveValue::Set(tokens),
        })
        .on_conflict(
            OnConflict::columns([
                entity::token_usage::Column::UserId,
                entity::token_usage::Column::UsageDate,
            ])
            .value(
                entity::token_usage::Column::TokensUsed,
                Expr::col((
                    entity::prelude::TokenUsage,
                    entity::token_usage::Column::TokensUsed,
                ))
                .add(tokens),
            )
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets the user's daily totals on or after `since`, oldest first.
    pub async fn get_since(
        &self,
        user_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<TokenUsage>, DbErr> {
        let models = entity::prelude::TokenUsage::find()
            .filter(entity::token_usage::Column::UserId.eq(user_id))
            .filter(entity::token_usage::Column::UsageDate.gte(since))
            .order_by_asc(entity::token_usage::Column::UsageDate)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(TokenUsage::from_entity).collect())
    }
}
