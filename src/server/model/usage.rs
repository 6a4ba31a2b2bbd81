use chrono::NaiveDate;

use crate::model::usage::TokenUsageDto;

/// Tokens consumed by one user on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenUsage {
    pub date: NaiveDate,
    pub tokens_used: i64,
}

impl TokenUsage {
    pub fn from_entity(entity: entity::token_usage::Model) -> Self {
        Self {
            date: entity.usage_date,
            tokens_used: entity.tokens_used,
        }
    }

    pub fn into_dto(self) -> TokenUsageDto {
        TokenUsageDto {
            date: self.date,
            tokens_used: self.tokens_used,
        }
    }
}
