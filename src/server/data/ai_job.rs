use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::ai_job::AiJobStatus,
    server::model::ai_job::{AiJob, CreateAiJobParam},
};

pub struct AiJobRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AiJobRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a new job in the `pending` state.
    pub async fn create(&self, param: &CreateAiJobParam, model: &str) -> Result<AiJob, DbErr> {
        let entity = entity::ai_job::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            deck_id: ActiveValue::Set(param.deck_id),
            user_id: ActiveValue::Set(param.user_id),
            input_text: ActiveValue::Set(param.input_text.clone()),
            requested_card_count: ActiveValue::Set(param.requested_card_count),
            actual_card_count: ActiveValue::Set(None),
            status: ActiveValue::Set(AiJobStatus::Pending.as_str().to_string()),
            model: ActiveValue::Set(model.to_string()),
            tokens_used: ActiveValue::Set(None),
            error_message: ActiveValue::Set(None),
            started_at: ActiveValue::Set(None),
            finished_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        AiJob::from_entity(entity)
    }

    pub async fn mark_running(&self, id: Uuid, now: DateTime<Utc>) -> Result<AiJob, DbErr> {
        let entity = entity::ai_job::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(AiJobStatus::Running.as_str().to_string()),
            started_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        AiJob::from_entity(entity)
    }

    pub async fn mark_succeeded(
        &self,
        id: Uuid,
        actual_card_count: i32,
        tokens_used: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<AiJob, DbErr> {
        let entity = entity::ai_job::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(AiJobStatus::Succeeded.as_str().to_string()),
            actual_card_count: ActiveValue::Set(Some(actual_card_count)),
            tokens_used: ActiveValue::Set(tokens_used),
            finished_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        AiJob::from_entity(entity)
    }

    pub async fn mark_failed(
        &self,
        id: Uuid,
        error_message: &str,
        now: DateTime<Utc>,
    ) -> Result<AiJob, DbErr> {
        let entity = entity::ai_job::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(AiJobStatus::Failed.as_str().to_string()),
            error_message: ActiveValue::Set(Some(error_message.to_string())),
            finished_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        AiJob::from_entity(entity)
    }

    /// Gets a job only if it belongs to the given deck.
    pub async fn find_in_deck(&self, deck_id: Uuid, job_id: Uuid) -> Result<Option<AiJob>, DbErr> {
        entity::prelude::AiJob::find_by_id(job_id)
            .filter(entity::ai_job::Column::DeckId.eq(deck_id))
            .one(self.db)
            .await?
            .map(AiJob::from_entity)
            .transpose()
    }

    /// Gets every job of a deck, newest first.
    pub async fn get_by_deck(&self, deck_id: Uuid) -> Result<Vec<AiJob>, DbErr> {
        entity::prelude::AiJob::find()
            .filter(entity::ai_job::Column::DeckId.eq(deck_id))
            .order_by_desc(entity::ai_job::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(AiJob::from_entity)
            .collect()
    }

    pub async fn delete_by_deck(&self, deck_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::AiJob::delete_many()
            .filter(entity::ai_job::Column::DeckId.eq(deck_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
