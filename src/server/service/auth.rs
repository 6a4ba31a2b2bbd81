//! Email/password accounts and cookie sessions.
//!
//! Passwords are hashed with Argon2. A session is a pair of random tokens: a short-lived
//! access token and a week-long refresh token. Only SHA-256 digests of the tokens are
//! stored, so a leaked database cannot be replayed as cookies.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::server::{
    data::{
        auth_session::{AuthSessionRepository, SessionHashes},
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::auth::{AuthUser, Authenticated, SessionTokens},
};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MAX_EMAIL_LEN: usize = 254;

/// Lifetime of an access token.
pub fn access_token_ttl() -> Duration {
    Duration::hours(1)
}

/// Lifetime of a refresh token, and of the auth cookies.
pub fn refresh_token_ttl() -> Duration {
    Duration::weeks(1)
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account.
    ///
    /// # Arguments
    /// - `email` - Email address, trimmed and lowercased before storage
    /// - `password` - Plain password of 8 to 128 characters
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - The new account
    /// - `Err(AppError::BadRequest)` - Malformed email, weak password, or email already taken
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthUser, AppError> {
        let email = normalize_email(email)?;
        validate_password(password)?;

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = hash_password(password)?;
        let user = repo.create(&email, &password_hash).await?;

        tracing::info!("Registered user {}", user.id);

        Ok(AuthUser::from_entity(user))
    }

    /// Verifies credentials and opens a new session.
    ///
    /// Expired sessions are purged as a side effect.
    ///
    /// # Returns
    /// - `Ok((user, tokens))` - The user and raw tokens to set as cookies
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(AuthUser, SessionTokens), AppError> {
        let email = email.trim().to_lowercase();

        let user = UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let sessions = AuthSessionRepository::new(self.db);
        let now = Utc::now();
        sessions.delete_expired(now).await?;

        let tokens = generate_tokens();
        sessions.create(user.id, session_hashes(&tokens, now)).await?;

        Ok((AuthUser::from_entity(user), tokens))
    }

    /// Resolves request cookies to a user.
    ///
    /// A live access token authenticates directly. Otherwise a live refresh token
    /// rotates both tokens and the new pair is returned in `refreshed`.
    ///
    /// # Returns
    /// - `Ok(Some(Authenticated))` - The user, with new tokens if a refresh happened
    /// - `Ok(None)` - Neither token resolves to a live session
    pub async fn authenticate(
        &self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<Option<Authenticated>, AppError> {
        let sessions = AuthSessionRepository::new(self.db);
        let users = UserRepository::new(self.db);
        let now = Utc::now();

        if let Some(token) = access_token {
            if let Some(session) = sessions.find_by_access_hash(&hash_token(token)).await? {
                if session.access_expires_at > now {
                    let user = users.find_by_id(session.user_id).await?;
                    return Ok(user.map(|user| Authenticated {
                        user: AuthUser::from_entity(user),
                        refreshed: None,
                    }));
                }
            }
        }

        let Some(token) = refresh_token else {
            return Ok(None);
        };
        let Some(session) = sessions.find_by_refresh_hash(&hash_token(token)).await? else {
            return Ok(None);
        };
        if session.refresh_expires_at <= now {
            return Ok(None);
        }
        let Some(user) = users.find_by_id(session.user_id).await? else {
            return Ok(None);
        };

        let tokens = generate_tokens();
        sessions.rotate(session, session_hashes(&tokens, now)).await?;

        tracing::debug!("Rotated session tokens for user {}", user.id);

        Ok(Some(Authenticated {
            user: AuthUser::from_entity(user),
            refreshed: Some(tokens),
        }))
    }

    /// Ends the session identified by either token. Unknown tokens are ignored.
    pub async fn logout(
        &self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<(), AppError> {
        let sessions = AuthSessionRepository::new(self.db);

        let mut session = None;
        if let Some(token) = access_token {
            session = sessions.find_by_access_hash(&hash_token(token)).await?;
        }
        if session.is_none() {
            if let Some(token) = refresh_token {
                session = sessions.find_by_refresh_hash(&hash_token(token)).await?;
            }
        }

        if let Some(session) = session {
            sessions.delete(session.id).await?;
        }

        Ok(())
    }
}

fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();

    let valid = email.len() <= MAX_EMAIL_LEN
        && email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));

    if !valid {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    Ok(email)
}

fn validate_password(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if len > MAX_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Hashes a password using Argon2 with a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verifies a password against a stored hash. Unparseable hashes never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

fn generate_tokens() -> SessionTokens {
    SessionTokens {
        access_token: generate_token(),
        refresh_token: generate_token(),
    }
}

/// Digest stored in place of a raw session token.
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

fn session_hashes(tokens: &SessionTokens, now: chrono::DateTime<Utc>) -> SessionHashes {
    SessionHashes {
        access_token_hash: hash_token(&tokens.access_token),
        refresh_token_hash: hash_token(&tokens.refresh_token),
        access_expires_at: now + access_token_ttl(),
        refresh_expires_at: now + refresh_token_ttl(),
    }
}
