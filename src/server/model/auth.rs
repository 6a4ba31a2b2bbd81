use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::{
    model::user::UserDto,
    server::error::{auth::AuthError, AppError},
};

/// The signed-in user, attached to the request by the auth middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

impl AuthUser {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }
}

/// Raw session tokens handed to the client as cookies.
///
/// Only SHA-256 digests of these values are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of resolving a request's cookies to a user.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: AuthUser,
    /// New tokens when the access token had expired and was refreshed.
    pub refreshed: Option<SessionTokens>,
}
