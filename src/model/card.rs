use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::api::PaginationMetaDto;

/// Review status of a card.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Pending,
    Accepted,
    Rejected,
}

impl CardStatus {
    pub const ALL: [CardStatus; 3] = [Self::Pending, Self::Accepted, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Whether this status ends a review.
    pub fn is_reviewed(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("Invalid card status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CardDto {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub question: String,
    pub answer: String,
    pub status: CardStatus,
    pub source_fragment: Option<String>,
    pub job_id: Option<Uuid>,
    pub review_started_at: Option<DateTime<Utc>>,
    pub review_finished_at: Option<DateTime<Utc>>,
    /// Seconds between review start and finish.
    pub time_spent: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedCardsDto {
    pub data: Vec<CardDto>,
    pub meta: PaginationMetaDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateCardDto {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub source_fragment: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateCardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateCardStatusDto {
    pub status: CardStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_rejects_legacy_values() {
        let legacy = serde_json::from_str::<UpdateCardStatusDto>(r#"{"status":"in_progress"}"#);
        assert!(legacy.is_err());

        let new = serde_json::from_str::<UpdateCardStatusDto>(r#"{"status":"new"}"#);
        assert!(new.is_err());

        let accepted: UpdateCardStatusDto =
            serde_json::from_str(r#"{"status":"accepted"}"#).unwrap();
        assert_eq!(accepted.status, CardStatus::Accepted);
    }

    #[test]
    fn status_parses_its_own_string_form() {
        for status in CardStatus::ALL {
            assert_eq!(status.as_str().parse::<CardStatus>(), Ok(status));
        }
        assert!("unknown".parse::<CardStatus>().is_err());
    }
}
