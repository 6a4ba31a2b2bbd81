use std::time::Duration;

use axum::{body::to_bytes, response::Response};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    service::ai::{AiClient, AiClientConfig, RetryPolicy},
    state::AppState,
};

mod card;
mod deck;

/// State with an AI client that is never reached by these handlers.
fn test_state(db: &DatabaseConnection) -> AppState {
    let ai_client = AiClient::new(
        reqwest::Client::new(),
        AiClientConfig {
            api_key: None,
            base_url: "http://127.0.0.1:9".to_string(),
            model: "test/model".to_string(),
            site_url: "http://localhost:8080".to_string(),
            site_name: "Fiszki".to_string(),
        },
        RetryPolicy {
            max_attempts: 1,
            base_delay: Duration::from_millis(1),
        },
    );

    AppState::new(db.clone(), ai_client, false)
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
