use uuid::Uuid;

use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::deck::{CreateDeckDto, DeckDto, PaginatedDecksDto, UpdateDeckDto},
};

/// Get a page of the user's decks.
///
/// `sort` is `field:order`; an empty `category_ids` disables the category filter.
pub async fn get_decks(
    page: u64,
    limit: u64,
    sort: &str,
    category_ids: &[Uuid],
) -> Result<PaginatedDecksDto, ApiError> {
    let mut url = format!("/api/decks?page={}&limit={}&sort={}", page, limit, sort);
    if !category_ids.is_empty() {
        let ids = category_ids
            .iter()
            .map(Uuid::to_string)
            .collect::<Vec<_>>()
            .join(",");
        url.push_str(&format!("&categories={}", ids));
    }

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_deck(deck_id: Uuid) -> Result<DeckDto, ApiError> {
    let response = send_request(get(&format!("/api/decks/{}", deck_id))).await?;
    parse_response(response).await
}

pub async fn create_deck(payload: CreateDeckDto) -> Result<DeckDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/decks").body(body)).await?;
    parse_response(response).await
}

pub async fn update_deck(deck_id: Uuid, payload: UpdateDeckDto) -> Result<DeckDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(put(&format!("/api/decks/{}", deck_id)).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_deck(deck_id: Uuid) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/decks/{}", deck_id))).await?;
    parse_empty_response(response).await
}
