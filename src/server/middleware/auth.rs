//! Authentication middleware and ownership guard.
//!
//! `require_auth` runs on every request. For protected paths it resolves the session
//! cookies to an `AuthUser` and stores it in request extensions, refreshing expired
//! access tokens on the way. Handlers then use `AuthGuard` to check that the user owns
//! the decks, cards and jobs they address. Resources owned by someone else are reported
//! as not found so their existence is not revealed.

use axum::{
    extract::{Request, State},
    http::{header::ACCEPT, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::api::ErrorDto,
    server::{
        data::{ai_job::AiJobRepository, card::CardRepository, deck::DeckRepository},
        error::AppError,
        middleware::session::SessionCookies,
        model::auth::AuthUser,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Ownership requirement checked by `AuthGuard`.
pub enum Permission {
    /// The user owns the deck.
    OwnsDeck(Uuid),
    /// The user owns the deck containing the card.
    OwnsCard(Uuid),
    /// The user owns the deck and the card belongs to it.
    OwnsCardInDeck(Uuid, Uuid),
    /// The user owns the deck and the job belongs to it.
    OwnsAiJob(Uuid, Uuid),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    user: &'a AuthUser,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, user: &'a AuthUser) -> Self {
        Self { db, user }
    }

    /// Checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(())` - All permissions hold
    /// - `Err(AppError::NotFound)` - A resource is missing or owned by another user
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require(&self, permissions: &[Permission]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::OwnsDeck(deck_id) => {
                    self.require_deck(*deck_id).await?;
                }
                Permission::OwnsCard(card_id) => {
                    let card = CardRepository::new(self.db)
                        .find_by_id(*card_id)
                        .await?
                        .ok_or_else(card_not_found)?;

                    if !self.owns_deck(card.deck_id).await? {
                        return Err(card_not_found());
                    }
                }
                Permission::OwnsCardInDeck(deck_id, card_id) => {
                    self.require_deck(*deck_id).await?;

                    CardRepository::new(self.db)
                        .find_in_deck(*deck_id, *card_id)
                        .await?
                        .ok_or_else(card_not_found)?;
                }
                Permission::OwnsAiJob(deck_id, job_id) => {
                    self.require_deck(*deck_id).await?;

                    AiJobRepository::new(self.db)
                        .find_in_deck(*deck_id, *job_id)
                        .await?
                        .ok_or_else(|| AppError::NotFound("AI job not found".to_string()))?;
                }
            }
        }

        Ok(())
    }

    async fn owns_deck(&self, deck_id: Uuid) -> Result<bool, AppError> {
        let deck = DeckRepository::new(self.db).find_by_id(deck_id).await?;

        Ok(deck.is_some_and(|deck| deck.user_id == self.user.id))
    }

    async fn require_deck(&self, deck_id: Uuid) -> Result<(), AppError> {
        if self.owns_deck(deck_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Deck not found".to_string()))
        }
    }
}

fn card_not_found() -> AppError {
    AppError::NotFound("Card not found".to_string())
}

/// Whether a path requires a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
}

/// Classifies a request path.
///
/// Every `/api` path except the `/api/auth` endpoints is protected, as are the deck pages.
pub fn route_access(path: &str) -> RouteAccess {
    let under = |prefix: &str| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    };

    if under("/api/auth") {
        RouteAccess::Public
    } else if under("/api") || path.starts_with("/decks") {
        RouteAccess::Protected
    } else {
        RouteAccess::Public
    }
}

/// Whether the client asked for a JSON response.
pub fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"))
}

/// Authenticates requests to protected paths.
///
/// A valid access token passes. An expired access token with a valid refresh token
/// rotates both tokens and sets new cookies on the response. Otherwise the cookies are
/// cleared and the request is rejected: 401 JSON for API clients, a redirect to
/// `/login` for page loads.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if route_access(request.uri().path()) == RouteAccess::Public {
        return next.run(request).await;
    }

    let cookies = SessionCookies::new(state.cookie_secure);
    let (access_token, refresh_token) = cookies.tokens(&jar);
    let wants_json = accepts_json(request.headers());

    let authenticated = match AuthService::new(&state.db)
        .authenticate(access_token.as_deref(), refresh_token.as_deref())
        .await
    {
        Ok(authenticated) => authenticated,
        Err(err) => return err.into_response(),
    };

    let Some(authenticated) = authenticated else {
        return unauthorized(cookies.clear(jar), wants_json);
    };

    request.extensions_mut().insert(authenticated.user);
    let response = next.run(request).await;

    match authenticated.refreshed {
        Some(tokens) => (cookies.set(jar, &tokens), response).into_response(),
        None => response,
    }
}

fn unauthorized(jar: CookieJar, wants_json: bool) -> Response {
    if wants_json {
        (
            StatusCode::UNAUTHORIZED,
            jar,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    } else {
        (jar, Redirect::to("/login")).into_response()
    }
}
