use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{
    model::{
        ai_job::{AiJobDetailDto, AiJobDto, AiJobStatus, CreateAiJobDto},
        card::CardDto,
    },
    server::model::card::Card,
};

/// Longest accepted source text, in characters.
pub const MAX_INPUT_CHARS: usize = 10_000;
/// Most cards a single job may request.
pub const MAX_REQUESTED_CARDS: i32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct AiJob {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub user_id: Uuid,
    pub input_text: String,
    pub requested_card_count: i32,
    pub actual_card_count: Option<i32>,
    pub status: AiJobStatus,
    pub model: String,
    pub tokens_used: Option<i32>,
    pub error_message: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl AiJob {
    pub fn from_entity(entity: entity::ai_job::Model) -> Result<Self, DbErr> {
        let status = entity
            .status
            .parse::<AiJobStatus>()
            .map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            deck_id: entity.deck_id,
            user_id: entity.user_id,
            input_text: entity.input_text,
            requested_card_count: entity.requested_card_count,
            actual_card_count: entity.actual_card_count,
            status,
            model: entity.model,
            tokens_used: entity.tokens_used,
            error_message: entity.error_message,
            started_at: entity.started_at,
            finished_at: entity.finished_at,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> AiJobDto {
        AiJobDto {
            id: self.id,
            deck_id: self.deck_id,
            status: self.status,
            model: self.model,
            requested_card_count: self.requested_card_count,
            actual_card_count: self.actual_card_count,
            tokens_used: self.tokens_used,
            error_message: self.error_message,
            started_at: self.started_at,
            finished_at: self.finished_at,
            created_at: self.created_at,
        }
    }
}

/// A job together with the cards it produced.
#[derive(Debug, Clone)]
pub struct AiJobDetail {
    pub job: AiJob,
    pub cards: Vec<Card>,
}

impl AiJobDetail {
    pub fn into_dto(self) -> AiJobDetailDto {
        let input_text = self.job.input_text.clone();
        AiJobDetailDto {
            job: self.job.into_dto(),
            input_text,
            cards: self.cards.into_iter().map(Card::into_dto).collect::<Vec<CardDto>>(),
        }
    }
}

/// Validated request to generate cards for a deck.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAiJobParam {
    pub deck_id: Uuid,
    pub user_id: Uuid,
    pub input_text: String,
    pub requested_card_count: i32,
}

impl CreateAiJobParam {
    pub fn from_dto(deck_id: Uuid, user_id: Uuid, dto: CreateAiJobDto) -> Result<Self, String> {
        let input_text = dto.input_text.trim();
        if input_text.is_empty() {
            return Err("Input text is required".to_string());
        }
        if input_text.chars().count() > MAX_INPUT_CHARS {
            return Err(format!(
                "Input text must be at most {} characters",
                MAX_INPUT_CHARS
            ));
        }
        if !(1..=MAX_REQUESTED_CARDS).contains(&dto.requested_card_count) {
            return Err(format!(
                "Requested card count must be between 1 and {}",
                MAX_REQUESTED_CARDS
            ));
        }

        Ok(Self {
            deck_id,
            user_id,
            input_text: input_text.to_string(),
            requested_card_count: dto.requested_card_count,
        })
    }
}

/// Outcome recorded for every generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiOutcome {
    Success,
    Failure,
}

impl AiOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "succeeded",
            Self::Failure => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(text: &str, count: i32) -> CreateAiJobDto {
        CreateAiJobDto {
            input_text: text.to_string(),
            requested_card_count: count,
        }
    }

    #[test]
    fn validates_text_and_count() {
        let (deck, user) = (Uuid::new_v4(), Uuid::new_v4());

        let param = CreateAiJobParam::from_dto(deck, user, dto("  notes  ", 5)).unwrap();
        assert_eq!(param.input_text, "notes");

        assert!(CreateAiJobParam::from_dto(deck, user, dto("   ", 5)).is_err());
        assert!(CreateAiJobParam::from_dto(deck, user, dto("notes", 0)).is_err());
        assert!(CreateAiJobParam::from_dto(deck, user, dto("notes", 101)).is_err());
        assert!(
            CreateAiJobParam::from_dto(deck, user, dto(&"x".repeat(MAX_INPUT_CHARS + 1), 1))
                .is_err()
        );
    }

    #[test]
    fn outcome_names_match_job_statuses() {
        assert_eq!(AiOutcome::Success.as_str(), "succeeded");
        assert_eq!(AiOutcome::Failure.as_str(), "failed");
    }
}
