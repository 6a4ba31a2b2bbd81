use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::usage::TokenUsageDto,
};

/// Get daily token usage for the last 30 days
pub async fn get_token_usage() -> Result<Vec<TokenUsageDto>, ApiError> {
    let response = send_request(get("/api/usage/tokens")).await?;
    parse_response(response).await
}
