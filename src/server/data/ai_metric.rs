use chrono::Utc;
use migration::Query;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::server::model::ai_job::AiOutcome;

/// Latency and outcome of each generation request, keyed by job id.
pub struct AiMetricRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AiMetricRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn record(
        &self,
        request_id: Uuid,
        latency_ms: i64,
        outcome: AiOutcome,
    ) -> Result<(), DbErr> {
        entity::prelude::AiMetric::insert(entity::ai_metric::ActiveModel {
            request_id: ActiveValue::Set(request_id),
            latency_ms: ActiveValue::Set(latency_ms),
            outcome: ActiveValue::Set(outcome.as_str().to_string()),
            recorded_at: ActiveValue::Set(Utc::now()),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn find(&self, request_id: Uuid) -> Result<Option<entity::ai_metric::Model>, DbErr> {
        entity::prelude::AiMetric::find_by_id(request_id)
            .one(self.db)
            .await
    }

    /// Deletes the metrics of every job belonging to a deck.
    pub async fn delete_by_deck(&self, deck_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::AiMetric::delete_many()
            .filter(
                entity::ai_metric::Column::RequestId.in_subquery(
                    Query::select()
                        .column(entity::ai_job::Column::Id)
                        .from(entity::prelude::AiJob)
                        .and_where(entity::ai_job::Column::DeckId.eq(deck_id))
                        .to_owned(),
                ),
            )
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
