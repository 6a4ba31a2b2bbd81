use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Method, Request, Response};
use serde::de::DeserializeOwned;

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(error_from(response, status).await)
    }
}

/// Helper function to parse empty success responses (204 No Content, etc.)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from(response, status).await)
    }
}

async fn error_from(response: Response, status: u64) -> ApiError {
    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };

    ApiError { status, message }
}

/// Create a request with credentials that asks for JSON.
///
/// The `Accept` header makes the auth middleware answer 401 instead of redirecting.
fn request(method: Method, url: &str) -> Request {
    Request::new(url)
        .method(method)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Accept", "application/json")
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    request(Method::GET, url)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    request(Method::POST, url).header("Content-Type", "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(url: &str) -> Request {
    request(Method::PUT, url).header("Content-Type", "application/json")
}

/// Create a PATCH request with credentials and JSON content type
pub fn patch(url: &str) -> Request {
    request(Method::PATCH, url).header("Content-Type", "application/json")
}

/// Create a DELETE request with credentials
pub fn delete(url: &str) -> Request {
    request(Method::DELETE, url)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
