//! AI job factory for creating test generation job records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test AI jobs.
pub struct AiJobFactory<'a> {
    db: &'a DatabaseConnection,
    deck_id: Uuid,
    user_id: Uuid,
    input_text: String,
    requested_card_count: i32,
    status: String,
}

impl<'a> AiJobFactory<'a> {
    /// Creates a new AiJobFactory for a deck and its owner.
    ///
    /// Defaults:
    /// - input_text: `"Some source text"`
    /// - requested_card_count: `3`
    /// - status: `"succeeded"`
    pub fn new(db: &'a DatabaseConnection, deck_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            deck_id,
            user_id,
            input_text: "Some source text".to_string(),
            requested_card_count: 3,
            status: "succeeded".to_string(),
        }
    }

    pub fn requested_card_count(mut self, count: i32) -> Self {
        self.requested_card_count = count;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the AI job into the database.
    pub async fn build(self) -> Result<entity::ai_job::Model, DbErr> {
        let now = Utc::now();
        let finished = self.status == "succeeded" || self.status == "failed";

        entity::ai_job::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            deck_id: ActiveValue::Set(self.deck_id),
            user_id: ActiveValue::Set(self.user_id),
            input_text: ActiveValue::Set(self.input_text),
            requested_card_count: ActiveValue::Set(self.requested_card_count),
            actual_card_count: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            model: ActiveValue::Set("test/model".to_string()),
            tokens_used: ActiveValue::Set(None),
            error_message: ActiveValue::Set(None),
            started_at: ActiveValue::Set(Some(now)),
            finished_at: ActiveValue::Set(finished.then_some(now)),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a succeeded AI job with default values.
pub async fn create_ai_job(
    db: &DatabaseConnection,
    deck_id: Uuid,
    user_id: Uuid,
) -> Result<entity::ai_job::Model, DbErr> {
    AiJobFactory::new(db, deck_id, user_id).build().await
}
