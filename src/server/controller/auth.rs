use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::{CookieJar, WithRejection};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CredentialsDto, LoginResponseDto, RegisterResponseDto, UserDto},
    },
    server::{
        error::AppError, middleware::session::SessionCookies, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the account without signing in; the user logs in afterwards.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `email` - Account email, normalized to lowercase
/// - `password` - 8 to 128 characters
///
/// # Returns
/// - `200 OK` - The new user and a confirmation message
/// - `400 Bad Request` - Invalid email, password length or email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Account created", body = RegisterResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CredentialsDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register(&payload.email, &payload.password)
        .await?;

    Ok(Json(RegisterResponseDto {
        user: user.into_dto(),
        message: "Account created. You can now log in.".to_string(),
    }))
}

/// Sign in with email and password.
///
/// Starts a session and sets the access and refresh token cookies.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The signed-in user, with session cookies set
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Signed in", body = LoginResponseDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(payload), _): WithRejection<Json<CredentialsDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let (user, tokens) = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    let jar = SessionCookies::new(state.cookie_secure).set(jar, &tokens);

    Ok((
        jar,
        Json(LoginResponseDto {
            user: user.into_dto(),
        }),
    ))
}

/// Sign out.
///
/// Ends the session named by the cookies, if any, and clears both cookies.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Signed out
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let cookies = SessionCookies::new(state.cookie_secure);
    let (access_token, refresh_token) = cookies.tokens(&jar);

    AuthService::new(&state.db)
        .logout(access_token.as_deref(), refresh_token.as_deref())
        .await?;

    Ok((
        cookies.clear(jar),
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the currently signed-in user.
///
/// Refreshes the session cookies when only the refresh token is still valid.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The user, or `null` when not signed in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user or null", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let cookies = SessionCookies::new(state.cookie_secure);
    let (access_token, refresh_token) = cookies.tokens(&jar);

    let authenticated = AuthService::new(&state.db)
        .authenticate(access_token.as_deref(), refresh_token.as_deref())
        .await?;

    let Some(authenticated) = authenticated else {
        return Ok((jar, Json(None::<UserDto>)));
    };

    let jar = match &authenticated.refreshed {
        Some(tokens) => cookies.set(jar, tokens),
        None => jar,
    };

    Ok((jar, Json(Some(authenticated.user.into_dto()))))
}
