use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        ai_job::{
            __path_create_ai_job, __path_get_ai_job, __path_list_ai_jobs, create_ai_job,
            get_ai_job, list_ai_jobs, AI_JOB_TAG,
        },
        auth::{
            __path_get_user, __path_login, __path_logout, __path_register, get_user, login,
            logout, register, AUTH_TAG,
        },
        card::{
            __path_create_card, __path_delete_card, __path_list_cards, __path_study_cards,
            __path_update_card, __path_update_card_status, __path_update_deck_card_status,
            create_card, delete_card, list_cards, study_cards, update_card, update_card_status,
            update_deck_card_status, CARD_TAG,
        },
        category::{
            __path_create_category, __path_get_categories, create_category, get_categories,
            CATEGORY_TAG,
        },
        deck::{
            __path_create_deck, __path_delete_deck, __path_get_deck, __path_list_decks,
            __path_update_deck, create_deck, delete_deck, get_deck, list_decks, update_deck,
            DECK_TAG,
        },
        usage::{__path_get_token_usage, get_token_usage, USAGE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Fiszki API", description = "Flashcard decks with AI card generation"),
    tags(
        (name = AUTH_TAG, description = "Accounts and sessions"),
        (name = DECK_TAG, description = "Flashcard decks"),
        (name = CARD_TAG, description = "Cards and study order"),
        (name = AI_JOB_TAG, description = "AI card generation"),
        (name = CATEGORY_TAG, description = "Deck categories"),
        (name = USAGE_TAG, description = "Token usage reports")
    )
)]
struct ApiDoc;

/// Builds the API routes along with the OpenAPI document and Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .routes(routes!(list_decks, create_deck))
        .routes(routes!(get_deck, update_deck, delete_deck))
        .routes(routes!(list_cards, create_card))
        .routes(routes!(study_cards))
        .routes(routes!(update_card, update_deck_card_status, delete_card))
        .routes(routes!(update_card_status))
        .routes(routes!(list_ai_jobs, create_ai_job))
        .routes(routes!(get_ai_job))
        .routes(routes!(get_categories, create_category))
        .routes(routes!(get_token_usage))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
