use uuid::Uuid;

use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, patch, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::card::{
        CardDto, CardStatus, CreateCardDto, PaginatedCardsDto, UpdateCardDto, UpdateCardStatusDto,
    },
};

/// Get a page of a deck's cards, optionally filtered by status
pub async fn get_cards(
    deck_id: Uuid,
    status: Option<CardStatus>,
    page: u64,
    limit: u64,
) -> Result<PaginatedCardsDto, ApiError> {
    let mut url = format!("/api/decks/{}/cards?page={}&limit={}", deck_id, page, limit);
    if let Some(status) = status {
        url.push_str(&format!("&status={}", status));
    }

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Get every card of a deck in review order
pub async fn get_study_cards(deck_id: Uuid) -> Result<Vec<CardDto>, ApiError> {
    let url = format!("/api/decks/{}/cards/study", deck_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_card(deck_id: Uuid, payload: CreateCardDto) -> Result<CardDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/decks/{}/cards", deck_id);
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn update_card(
    deck_id: Uuid,
    card_id: Uuid,
    payload: UpdateCardDto,
) -> Result<CardDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/decks/{}/cards/{}", deck_id, card_id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn update_card_status(card_id: Uuid, status: CardStatus) -> Result<CardDto, ApiError> {
    let body = serialize_json(&UpdateCardStatusDto { status })?;
    let url = format!("/api/cards/{}/status", card_id);
    let response = send_request(patch(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_card(deck_id: Uuid, card_id: Uuid) -> Result<(), ApiError> {
    let url = format!("/api/decks/{}/cards/{}", deck_id, card_id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
