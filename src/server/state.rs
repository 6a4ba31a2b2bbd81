//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Chat-completion client for card generation
//! - Cookie settings for the auth cookies

use sea_orm::DatabaseConnection;

use crate::server::service::ai::AiClient;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool and
/// `AiClient` wraps a `reqwest::Client` which uses an `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for the external chat-completion API.
    pub ai_client: AiClient,

    /// Whether auth cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `ai_client` - Chat-completion client
    /// - `cookie_secure` - Whether to mark auth cookies `Secure`
    pub fn new(db: DatabaseConnection, ai_client: AiClient, cookie_secure: bool) -> Self {
        Self {
            db,
            ai_client,
            cookie_secure,
        }
    }
}
