//! Card factory for creating test card entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let card = CardFactory::new(&db, deck.id)
///     .status("accepted")
///     .job_id(Some(job.id))
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    deck_id: Uuid,
    question: String,
    answer: String,
    status: String,
    job_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory for the given deck.
    ///
    /// Defaults:
    /// - question: `"Question {id}"`
    /// - answer: `"Answer {id}"`
    /// - status: `"pending"`
    /// - job_id: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, deck_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            deck_id,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            status: "pending".to_string(),
            job_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    /// Sets the raw status string stored in the database.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn job_id(mut self, job_id: Option<Uuid>) -> Self {
        self.job_id = job_id;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the card entity into the database.
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            deck_id: ActiveValue::Set(self.deck_id),
            question: ActiveValue::Set(self.question),
            answer: ActiveValue::Set(self.answer),
            status: ActiveValue::Set(self.status),
            source_fragment: ActiveValue::Set(None),
            job_id: ActiveValue::Set(self.job_id),
            review_started_at: ActiveValue::Set(None),
            review_finished_at: ActiveValue::Set(None),
            time_spent: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending card with default values in the given deck.
pub async fn create_card(
    db: &DatabaseConnection,
    deck_id: Uuid,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, deck_id).build().await
}
