use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::token_usage::TokenUsageRepository, error::AppError, model::usage::TokenUsage,
};

/// Number of days covered by the usage report, today included.
pub const USAGE_WINDOW_DAYS: i64 = 30;

pub struct UsageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's daily token totals for the last 30 days, oldest first.
    ///
    /// Days without generation are omitted.
    pub async fn recent(&self, user_id: Uuid) -> Result<Vec<TokenUsage>, AppError> {
        let since = Utc::now().date_naive() - Duration::days(USAGE_WINDOW_DAYS - 1);

        let repo = TokenUsageRepository::new(self.db);

        Ok(repo.get_since(user_id, since).await?)
    }
}
