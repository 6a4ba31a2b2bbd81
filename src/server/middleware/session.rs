//! Auth cookie management.
//!
//! Session tokens travel as two httpOnly cookies. This wrapper keeps cookie names and
//! attributes in one place so every handler sets and clears them identically.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::server::model::auth::SessionTokens;

pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";
pub const REFRESH_TOKEN_COOKIE: &str = "sb-refresh-token";

/// Cookie lifetime, matching the refresh token.
const COOKIE_MAX_AGE: time::Duration = time::Duration::weeks(1);

/// Reads, writes and clears the session cookies.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookies {
    /// Whether cookies carry the `Secure` attribute.
    secure: bool,
}

impl SessionCookies {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Gets the raw access and refresh tokens, if present.
    pub fn tokens(&self, jar: &CookieJar) -> (Option<String>, Option<String>) {
        let read = |name| jar.get(name).map(|cookie| cookie.value().to_string());

        (read(ACCESS_TOKEN_COOKIE), read(REFRESH_TOKEN_COOKIE))
    }

    /// Adds both token cookies to the jar.
    pub fn set(&self, jar: CookieJar, tokens: &SessionTokens) -> CookieJar {
        jar.add(self.build(ACCESS_TOKEN_COOKIE, tokens.access_token.clone()))
            .add(self.build(REFRESH_TOKEN_COOKIE, tokens.refresh_token.clone()))
    }

    /// Expires both token cookies.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(ACCESS_TOKEN_COOKIE).path("/"))
            .remove(Cookie::build(REFRESH_TOKEN_COOKIE).path("/"))
    }

    fn build(&self, name: &'static str, value: String) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(COOKIE_MAX_AGE)
            .build()
    }
}
