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
        deck::{CreateDeckDto, DeckDto, PaginatedDecksDto, UpdateDeckDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            auth::AuthUser,
            deck::{
                parse_category_filter, CreateDeckParam, DeckListParam, DeckSort, DeckSummary,
                UpdateDeckParam,
            },
            pagination::PageRequest,
        },
        service::deck::DeckService,
        state::AppState,
    },
};

/// Tag for grouping deck endpoints in OpenAPI documentation
pub static DECK_TAG: &str = "deck";

pub const DEFAULT_DECK_LIMIT: u64 = 12;
pub const MAX_DECK_LIMIT: u64 = 50;

#[derive(Deserialize, IntoParams)]
pub struct DeckListQuery {
    /// Page number starting at 1 (default: 1)
    pub page: Option<u64>,
    /// Decks per page, 1 to 50 (default: 12)
    pub limit: Option<u64>,
    /// `field:order` with field `created_at`, `updated_at` or `name` (default: `created_at:desc`)
    pub sort: Option<String>,
    /// Comma-separated category ids; decks linked to any of them match
    pub categories: Option<String>,
}

/// List the user's decks.
///
/// Returns one page of decks owned by the authenticated user, each with its card count.
///
/// # Access Control
/// - Authenticated user; only own decks are listed
///
/// # Returns
/// - `200 OK` - Paginated decks
/// - `400 Bad Request` - Invalid page, limit, sort or category id
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    get,
    path = "/api/decks",
    tag = DECK_TAG,
    params(DeckListQuery),
    responses(
        (status = 200, description = "Paginated decks", body = PaginatedDecksDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_decks(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Query(query), _): WithRejection<Query<DeckListQuery>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::new(query.page, query.limit, DEFAULT_DECK_LIMIT, MAX_DECK_LIMIT)?;
    let sort = match query.sort.as_deref() {
        Some(raw) => raw.parse::<DeckSort>().map_err(AppError::BadRequest)?,
        None => DeckSort::default(),
    };
    let category_ids =
        parse_category_filter(query.categories.as_deref()).map_err(AppError::BadRequest)?;

    let result = DeckService::new(&state.db)
        .list(DeckListParam {
            user_id: user.id,
            page,
            sort,
            category_ids,
        })
        .await?;

    let meta = page.meta(result.total, result.decks.len());

    Ok(Json(PaginatedDecksDto {
        data: result
            .decks
            .into_iter()
            .map(DeckSummary::into_dto)
            .collect(),
        meta,
    }))
}

/// Create a deck.
///
/// Creates a deck for the authenticated user, linking it to the given categories in
/// the same transaction.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `201 Created` - The new deck with `card_count: 0`
/// - `400 Bad Request` - Invalid fields or unknown category
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    post,
    path = "/api/decks",
    tag = DECK_TAG,
    request_body = CreateDeckDto,
    responses(
        (status = 201, description = "Deck created", body = DeckDto),
        (status = 400, description = "Invalid deck data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_deck(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Json(payload), _): WithRejection<Json<CreateDeckDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateDeckParam::from_dto(user.id, payload).map_err(AppError::BadRequest)?;

    let deck = DeckService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(deck.into_dto())))
}

/// Get a deck with its categories and card count.
///
/// # Access Control
/// - `OwnsDeck` - Deck must belong to the user
///
/// # Returns
/// - `200 OK` - The deck
/// - `404 Not Found` - Deck missing or owned by another user
#[utoipa::path(
    get,
    path = "/api/decks/{id}",
    tag = DECK_TAG,
    params(("id" = Uuid, Path, description = "Deck ID")),
    responses(
        (status = 200, description = "Deck", body = DeckDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_deck(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(deck_id), _): WithRejection<Path<Uuid>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsDeck(deck_id)])
        .await?;

    let deck = DeckService::new(&state.db).get(deck_id).await?;

    Ok(Json(deck.into_dto()))
}

/// Update a deck.
///
/// Absent fields are kept; `description: null` clears the description and
/// `category_ids` replaces all category links.
///
/// # Access Control
/// - `OwnsDeck` - Deck must belong to the user
///
/// # Returns
/// - `200 OK` - The updated deck
/// - `400 Bad Request` - Invalid fields or unknown category
/// - `404 Not Found` - Deck missing or owned by another user
#[utoipa::path(
    put,
    path = "/api/decks/{id}",
    tag = DECK_TAG,
    params(("id" = Uuid, Path, description = "Deck ID")),
    request_body = UpdateDeckDto,
    responses(
        (status = 200, description = "Deck updated", body = DeckDto),
        (status = 400, description = "Invalid deck data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_deck(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(deck_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateDeckDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsDeck(deck_id)])
        .await?;

    let param = UpdateDeckParam::from_dto(payload).map_err(AppError::BadRequest)?;

    let deck = DeckService::new(&state.db).update(deck_id, param).await?;

    Ok(Json(deck.into_dto()))
}

/// Delete a deck with its cards, category links and generation jobs.
///
/// # Access Control
/// - `OwnsDeck` - Deck must belong to the user
///
/// # Returns
/// - `204 No Content` - Deck deleted
/// - `404 Not Found` - Deck missing or owned by another user
#[utoipa::path(
    delete,
    path = "/api/decks/{id}",
    tag = DECK_TAG,
    params(("id" = Uuid, Path, description = "Deck ID")),
    responses(
        (status = 204, description = "Deck deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_deck(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(deck_id), _): WithRejection<Path<Uuid>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsDeck(deck_id)])
        .await?;

    DeckService::new(&state.db).delete(deck_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
