use uuid::Uuid;

use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::ai_job::{AiJobCreatedDto, AiJobDetailDto, AiJobDto, CreateAiJobDto},
};

/// Generate cards for a deck; resolves once the job has finished
pub async fn create_ai_job(
    deck_id: Uuid,
    payload: CreateAiJobDto,
) -> Result<AiJobCreatedDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/decks/{}/ai-jobs", deck_id);
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn get_ai_jobs(deck_id: Uuid) -> Result<Vec<AiJobDto>, ApiError> {
    let url = format!("/api/decks/{}/ai-jobs", deck_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_ai_job(deck_id: Uuid, job_id: Uuid) -> Result<AiJobDetailDto, ApiError> {
    let url = format!("/api/decks/{}/ai-jobs/{}", deck_id, job_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
