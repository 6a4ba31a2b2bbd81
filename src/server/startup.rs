use std::time::Duration;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        ai::{AiClient, AiClientConfig, RetryPolicy},
        category::CategoryService,
    },
};

/// Categories created on first start so decks can be organised immediately.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "History",
    "Languages",
    "Mathematics",
    "Programming",
    "Science",
    "Other",
];

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts the default categories when the category table is empty.
pub async fn seed_categories(db: &DatabaseConnection) -> Result<(), AppError> {
    let inserted = CategoryService::new(db)
        .seed_defaults(&DEFAULT_CATEGORIES)
        .await?;

    if inserted > 0 {
        tracing::info!("Seeded {} default categories", inserted);
    }

    Ok(())
}

/// Builds the chat-completion client from configuration.
///
/// Redirects are disabled and every request is bounded by `AI_TIMEOUT_SECS`.
pub fn setup_ai_client(config: &Config) -> Result<AiClient, AppError> {
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.ai_timeout_secs))
        .build()?;

    Ok(AiClient::new(
        http,
        AiClientConfig {
            api_key: config.ai_api_key.clone(),
            base_url: config.ai_base_url.clone(),
            model: config.ai_model.clone(),
            site_url: config.site_url.clone(),
            site_name: config.site_name.clone(),
        },
        RetryPolicy {
            max_attempts: config.ai_max_attempts.max(1),
            base_delay: Duration::from_millis(config.ai_base_delay_ms),
        },
    ))
}
