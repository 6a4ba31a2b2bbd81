use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        user::{CredentialsDto, LoginResponseDto, RegisterResponseDto, UserDto},
    },
};

/// Get the signed-in user, or `None` without a session
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_response(response).await
}

pub async fn login(credentials: CredentialsDto) -> Result<LoginResponseDto, ApiError> {
    let body = serialize_json(&credentials)?;
    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}

pub async fn register(credentials: CredentialsDto) -> Result<RegisterResponseDto, ApiError> {
    let body = serialize_json(&credentials)?;
    let response = send_request(post("/api/auth/register").body(body)).await?;
    parse_response(response).await
}

pub async fn logout() -> Result<MessageDto, ApiError> {
    let response = send_request(post("/api/auth/logout")).await?;
    parse_response(response).await
}
