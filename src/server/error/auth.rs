use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is attached to the request.
    ///
    /// Raised when a handler requires a user but the auth middleware did not run
    /// or the cookies were missing. Results in 401 Unauthorized.
    #[error("Request is not authenticated")]
    NotAuthenticated,

    /// Access or refresh token does not match a live session.
    #[error("Session token is invalid or expired")]
    InvalidSession,

    /// Email/password pair did not match a stored account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Stored password hash could not be parsed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` / `InvalidSession` → 401 with "Unauthorized"
/// - `InvalidCredentials` → 401 with "Invalid email or password"
/// - `PasswordHash` → 500 with generic message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::InvalidSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::PasswordHash(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
