use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        card::{
            CardDto, CardStatus, CreateCardDto, PaginatedCardsDto, UpdateCardDto,
            UpdateCardStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            auth::AuthUser,
            card::{Card, CardListParam, CreateCardParam, UpdateCardParam},
            pagination::PageRequest,
        },
        service::card::CardService,
        state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

pub const DEFAULT_CARD_LIMIT: u64 = 50;
pub const MAX_CARD_LIMIT: u64 = 50;

#[derive(Deserialize, IntoParams)]
pub struct CardListQuery {
    /// Only cards with this status
    pub status: Option<CardStatus>,
    /// Page number starting at 1 (default: 1)
    pub page: Option<u64>,
    /// Cards per page, 1 to 50 (default: 50)
    pub limit: Option<u64>,
}

/// List a deck's cards, newest first.
///
/// # Access Control
/// - `OwnsDeck` - Deck must belong to the user
///
/// # Returns
/// - `200 OK` - Paginated cards
/// - `400 Bad Request` - Invalid status, page or limit
/// - `404 Not Found` - Deck missing or owned by another user
#[utoipa::path(
    get,
    path = "/api/decks/{id}/cards",
    tag = CARD_TAG,
    params(("id" = Uuid, Path, description = "Deck ID"), CardListQuery),
    responses(
        (status = 200, description = "Paginated cards", body = PaginatedCardsDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cards(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(deck_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<CardListQuery>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsDeck(deck_id)])
        .await?;

    let page = PageRequest::new(query.page, query.limit, DEFAULT_CARD_LIMIT, MAX_CARD_LIMIT)?;

    let result = CardService::new(&state.db)
        .list(
            deck_id,
            CardListParam {
                status: query.status,
                page: page.page,
                limit: page.limit,
            },
        )
        .await?;

    let meta = page.meta(result.total, result.cards.len());

    Ok(Json(PaginatedCardsDto {
        data: result.cards.into_iter().map(Card::into_dto).collect(),
        meta,
    }))
}

/// Create a card manually.
///
/// The card starts as `pending` with no generation job.
///
/// # Access Control
/// - `OwnsDeck` - Deck must belong to the user
///
/// # Returns
/// - `201 Created` - The new card
/// - `400 Bad Request` - Empty or overlong question or answer
/// - `404 Not Found` - Deck missing or owned by another user
#[utoipa::path(
    post,
    path = "/api/decks/{id}/cards",
    tag = CARD_TAG,
    params(("id" = Uuid, Path, description = "Deck ID")),
    request_body = CreateCardDto,
    responses(
        (status = 201, description = "Card created", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(deck_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateCardDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsDeck(deck_id)])
        .await?;

    let param = CreateCardParam::from_dto(payload).map_err(AppError::BadRequest)?;

    let card = CardService::new(&state.db).create(deck_id, param).await?;

    Ok((StatusCode::CREATED, Json(card.into_dto())))
}

/// Change a card's question and/or answer.
///
/// # Access Control
/// - `OwnsCardInDeck` - Card must be in the user's deck
///
/// # Returns
/// - `200 OK` - The updated card
/// - `400 Bad Request` - No field given, or a field is empty or too long
/// - `404 Not Found` - Deck or card missing, or the card belongs to another deck
#[utoipa::path(
    put,
    path = "/api/decks/{id}/cards/{card_id}",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID"),
        ("card_id" = Uuid, Path, description = "Card ID")
    ),
    request_body = UpdateCardDto,
    responses(
        (status = 200, description = "Card updated", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path((deck_id, card_id)), _): WithRejection<Path<(Uuid, Uuid)>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateCardDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsCardInDeck(deck_id, card_id)])
        .await?;

    let param = UpdateCardParam::from_dto(payload).map_err(AppError::BadRequest)?;

    let card = CardService::new(&state.db)
        .update(deck_id, card_id, param)
        .await?;

    Ok(Json(card.into_dto()))
}

/// Set the review status of a card in a deck.
///
/// Accepting or rejecting stamps the review finish time and time spent.
///
/// # Access Control
/// - `OwnsCardInDeck` - Card must be in the user's deck
///
/// # Returns
/// - `200 OK` - The updated card
/// - `400 Bad Request` - Status is not `pending`, `accepted` or `rejected`
/// - `404 Not Found` - Deck or card missing, or the card belongs to another deck
#[utoipa::path(
    patch,
    path = "/api/decks/{id}/cards/{card_id}",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID"),
        ("card_id" = Uuid, Path, description = "Card ID")
    ),
    request_body = UpdateCardStatusDto,
    responses(
        (status = 200, description = "Card status updated", body = CardDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_deck_card_status(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path((deck_id, card_id)), _): WithRejection<Path<(Uuid, Uuid)>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateCardStatusDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsCardInDeck(deck_id, card_id)])
        .await?;

    let card = CardService::new(&state.db)
        .update_status(card_id, payload.status)
        .await?;

    Ok(Json(card.into_dto()))
}

/// Set the review status of a card by its ID alone.
///
/// # Access Control
/// - `OwnsCard` - Card must be in one of the user's decks
///
/// # Returns
/// - `200 OK` - The updated card
/// - `400 Bad Request` - Status is not `pending`, `accepted` or `rejected`
/// - `404 Not Found` - Card missing or owned by another user
#[utoipa::path(
    patch,
    path = "/api/cards/{id}/status",
    tag = CARD_TAG,
    params(("id" = Uuid, Path, description = "Card ID")),
    request_body = UpdateCardStatusDto,
    responses(
        (status = 200, description = "Card status updated", body = CardDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card_status(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(card_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateCardStatusDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsCard(card_id)])
        .await?;

    let card = CardService::new(&state.db)
        .update_status(card_id, payload.status)
        .await?;

    Ok(Json(card.into_dto()))
}

/// Delete a card from a deck.
///
/// # Access Control
/// - `OwnsCardInDeck` - Card must be in the user's deck
///
/// # Returns
/// - `204 No Content` - Card deleted
/// - `404 Not Found` - Deck or card missing, or the card belongs to another deck
#[utoipa::path(
    delete,
    path = "/api/decks/{id}/cards/{card_id}",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID"),
        ("card_id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 204, description = "Card deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path((deck_id, card_id)), _): WithRejection<Path<(Uuid, Uuid)>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsCardInDeck(deck_id, card_id)])
        .await?;

    CardService::new(&state.db).delete(deck_id, card_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get every card of a deck in review order.
///
/// Pending cards come first, then rejected, then accepted; creation order within each.
///
/// # Access Control
/// - `OwnsDeck` - Deck must belong to the user
///
/// # Returns
/// - `200 OK` - All cards of the deck
/// - `404 Not Found` - Deck missing or owned by another user
#[utoipa::path(
    get,
    path = "/api/decks/{id}/cards/study",
    tag = CARD_TAG,
    params(("id" = Uuid, Path, description = "Deck ID")),
    responses(
        (status = 200, description = "Cards in review order", body = Vec<CardDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn study_cards(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(deck_id), _): WithRejection<Path<Uuid>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsDeck(deck_id)])
        .await?;

    let cards = CardService::new(&state.db).study(deck_id).await?;

    Ok(Json(
        cards.into_iter().map(Card::into_dto).collect::<Vec<_>>(),
    ))
}
