use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::model::card::{CardDto, CardStatus};

/// Longest accepted question, in characters.
pub const MAX_QUESTION_LEN: usize = 200;
/// Longest accepted answer, in characters.
pub const MAX_ANSWER_LEN: usize = 500;
/// Longest stored source fragment, in characters.
pub const MAX_SOURCE_FRAGMENT_LEN: usize = 500;

/// Job id reported for manually created cards.
///
/// Manual cards store `NULL` in `card.job_id`; this value only exists so clients
/// that need a non-null marker can compare against a well-known constant.
pub const MANUAL_JOB_ID: Uuid = Uuid::nil();

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub question: String,
    pub answer: String,
    pub status: CardStatus,
    pub source_fragment: Option<String>,
    pub job_id: Option<Uuid>,
    pub review_started_at: Option<DateTime<Utc>>,
    pub review_finished_at: Option<DateTime<Utc>>,
    pub time_spent: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Converts an entity model, failing if the stored status is not a known value.
    pub fn from_entity(entity: entity::card::Model) -> Result<Self, DbErr> {
        let status = entity.status.parse::<CardStatus>().map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            deck_id: entity.deck_id,
            question: entity.question,
            answer: entity.answer,
            status,
            source_fragment: entity.source_fragment,
            job_id: entity.job_id,
            review_started_at: entity.review_started_at,
            review_finished_at: entity.review_finished_at,
            time_spent: entity.time_spent,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            deck_id: self.deck_id,
            question: self.question,
            answer: self.answer,
            status: self.status,
            source_fragment: self.source_fragment,
            job_id: self.job_id,
            review_started_at: self.review_started_at,
            review_finished_at: self.review_finished_at,
            time_spent: self.time_spent,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Review timestamps written together with a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewStamps {
    pub review_started_at: Option<DateTime<Utc>>,
    pub review_finished_at: Option<DateTime<Utc>>,
    pub time_spent: Option<i64>,
}

impl ReviewStamps {
    /// Computes the review fields for moving a card to `status` at `now`.
    ///
    /// Finishing a review (accepted or rejected) stamps the finish time, fills in the
    /// start time if the card was never opened, and records the elapsed whole seconds.
    /// Returning to pending keeps the start time and clears the rest.
    pub fn for_transition(
        status: CardStatus,
        review_started_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        if status.is_reviewed() {
            let started = review_started_at.unwrap_or(now);
            Self {
                review_started_at: Some(started),
                review_finished_at: Some(now),
                time_spent: Some((now - started).num_seconds().max(0)),
            }
        } else {
            Self {
                review_started_at,
                review_finished_at: None,
                time_spent: None,
            }
        }
    }
}

/// Validated input for a manually created card.
#[derive(Debug, Clone)]
pub struct CreateCardParam {
    pub question: String,
    pub answer: String,
    pub source_fragment: Option<String>,
}

impl CreateCardParam {
    /// Trims and validates a card submitted by a user.
    pub fn from_dto(dto: crate::model::card::CreateCardDto) -> Result<Self, String> {
        let question = validate_question(&dto.question)?;
        let answer = validate_answer(&dto.answer)?;
        let source_fragment = dto
            .source_fragment
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| s.chars().take(MAX_SOURCE_FRAGMENT_LEN).collect());

        Ok(Self {
            question,
            answer,
            source_fragment,
        })
    }
}

/// A generated card about to be inserted as part of a job.
#[derive(Debug, Clone)]
pub struct NewGeneratedCard {
    pub question: String,
    pub answer: String,
}

/// Validated content update; at least one field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCardParam {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl UpdateCardParam {
    pub fn from_dto(dto: crate::model::card::UpdateCardDto) -> Result<Self, String> {
        if dto.question.is_none() && dto.answer.is_none() {
            return Err("At least one of question or answer is required".to_string());
        }

        Ok(Self {
            question: dto.question.as_deref().map(validate_question).transpose()?,
            answer: dto.answer.as_deref().map(validate_answer).transpose()?,
        })
    }
}

/// Filters and paging for the card list of one deck.
#[derive(Debug, Clone)]
pub struct CardListParam {
    pub status: Option<CardStatus>,
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Clone)]
pub struct PaginatedCards {
    pub cards: Vec<Card>,
    pub total: u64,
}

fn validate_question(raw: &str) -> Result<String, String> {
    validate_text(raw, "Question", MAX_QUESTION_LEN)
}

fn validate_answer(raw: &str) -> Result<String, String> {
    validate_text(raw, "Answer", MAX_ANSWER_LEN)
}

fn validate_text(raw: &str, field: &str, max: usize) -> Result<String, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(format!("{} is required", field));
    }
    if value.chars().count() > max {
        return Err(format!("{} must be at most {} characters", field, max));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::card::{CreateCardDto, UpdateCardDto};
    use chrono::Duration;

    #[test]
    fn finishing_a_review_records_elapsed_seconds() {
        let started = Utc::now();
        let now = started + Duration::seconds(42);

        let stamps = ReviewStamps::for_transition(CardStatus::Accepted, Some(started), now);

        assert_eq!(stamps.review_started_at, Some(started));
        assert_eq!(stamps.review_finished_at, Some(now));
        assert_eq!(stamps.time_spent, Some(42));
    }

    #[test]
    fn finishing_an_unopened_card_starts_and_ends_at_once() {
        let now = Utc::now();

        let stamps = ReviewStamps::for_transition(CardStatus::Rejected, None, now);

        assert_eq!(stamps.review_started_at, Some(now));
        assert_eq!(stamps.time_spent, Some(0));
    }

    #[test]
    fn returning_to_pending_clears_finish() {
        let started = Utc::now();

        let stamps = ReviewStamps::for_transition(CardStatus::Pending, Some(started), Utc::now());

        assert_eq!(stamps.review_started_at, Some(started));
        assert_eq!(stamps.review_finished_at, None);
        assert_eq!(stamps.time_spent, None);
    }

    #[test]
    fn create_trims_and_bounds_fields() {
        let param = CreateCardParam::from_dto(CreateCardDto {
            question: "  What is Rust?  ".to_string(),
            answer: "A language".to_string(),
            source_fragment: Some("   ".to_string()),
        })
        .unwrap();
        assert_eq!(param.question, "What is Rust?");
        assert!(param.source_fragment.is_none());

        let too_long = CreateCardParam::from_dto(CreateCardDto {
            question: "q".repeat(MAX_QUESTION_LEN + 1),
            answer: "a".to_string(),
            source_fragment: None,
        });
        assert!(too_long.is_err());

        let blank = CreateCardParam::from_dto(CreateCardDto {
            question: "q".to_string(),
            answer: " ".to_string(),
            source_fragment: None,
        });
        assert_eq!(blank.unwrap_err(), "Answer is required");
    }

    #[test]
    fn update_requires_a_field() {
        assert!(UpdateCardParam::from_dto(UpdateCardDto::default()).is_err());

        let param = UpdateCardParam::from_dto(UpdateCardDto {
            question: None,
            answer: Some(" new ".to_string()),
        })
        .unwrap();
        assert_eq!(param.answer.as_deref(), Some("new"));
    }
}
