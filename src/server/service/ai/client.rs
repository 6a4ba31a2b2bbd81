use crate::server::{
    error::ai::AiError,
    service::ai::{
        retry::{with_backoff, RetryPolicy},
        types::{ChatCompletion, ChatRequest},
    },
};

/// Longest upstream error body kept in `AiError::Upstream`.
const MAX_ERROR_BODY: usize = 512;

/// Connection settings for the chat-completion provider.
#[derive(Debug, Clone)]
pub struct AiClientConfig {
    pub api_key: Option<String>,
    /// Base URL without trailing slash, e.g. `https://openrouter.ai/api`.
    pub base_url: String,
    /// Default model name used by callers that do not pick one.
    pub model: String,
    /// Sent as `HTTP-Referer` for provider attribution.
    pub site_url: String,
    /// Sent as `X-Title` for provider attribution.
    pub site_name: String,
}

/// Client for an OpenRouter-compatible `/v1/chat/completions` endpoint.
///
/// Every call validates the request, then sends it with bounded exponential backoff
/// for transient failures.
#[derive(Debug, Clone)]
pub struct AiClient {
    http: reqwest::Client,
    config: AiClientConfig,
    retry: RetryPolicy,
}

impl AiClient {
    pub fn new(http: reqwest::Client, config: AiClientConfig, retry: RetryPolicy) -> Self {
        Self {
            http,
            config,
            retry,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Sends a chat-completion request.
    ///
    /// # Returns
    /// - `Ok(ChatCompletion)` - Validated response
    /// - `Err(AiError::Configuration)` - Missing API key or invalid request, never sent
    /// - `Err(AiError)` - Last error after retries, or the first non-transient error
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatCompletion, AiError> {
        request.validate()?;

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AiError::Configuration("OPENROUTER_API_KEY is not set".to_string()))?;

        with_backoff(&self.retry, || self.send_once(api_key, request)).await
    }

    async fn send_once(
        &self,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<ChatCompletion, AiError> {
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.config.site_url)
            .header("X-Title", &self.config.site_name)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(AiError::from_status(status.as_u16(), body));
        }

        ChatCompletion::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::ai::types::ChatMessage;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer, api_key: Option<&str>, timeout: Duration) -> AiClient {
        AiClient::new(
            reqwest::Client::builder().timeout(timeout).build().unwrap(),
            AiClientConfig {
                api_key: api_key.map(str::to_string),
                base_url: server.uri(),
                model: "test/model".to_string(),
                site_url: "http://localhost:8080".to_string(),
                site_name: "Fiszki".to_string(),
            },
            RetryPolicy {
                max_attempts: 3,
                base_delay: Duration::from_millis(5),
            },
        )
    }

    fn request() -> ChatRequest {
        ChatRequest::new("test/model", vec![ChatMessage::user("Make flashcards")])
    }

    fn success_body() -> serde_json::Value {
        json!({
            "id": "gen-1",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "test/model",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "{}" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 3, "completion_tokens": 4, "total_tokens": 7 }
        })
    }

    #[tokio::test]
    async fn sends_auth_and_attribution_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer secret"))
            .and(header("x-title", "Fiszki"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
            .expect(1)
            .mount(&server)
            .await;

        let completion = client_for(&server, Some("secret"), Duration::from_secs(5))
            .chat(&request())
            .await
            .unwrap();

        assert_eq!(completion.total_tokens(), Some(7));
    }

    #[tokio::test]
    async fn retries_server_errors_until_attempts_are_exhausted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server)
            .await;

        let result = client_for(&server, Some("secret"), Duration::from_secs(5))
            .chat(&request())
            .await;

        assert!(matches!(result, Err(AiError::Upstream { status: 503, .. })));
    }

    #[tokio::test]
    async fn recovers_after_transient_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server, Some("secret"), Duration::from_secs(5))
            .chat(&request())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn retries_timeouts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(success_body())
                    .set_delay(Duration::from_millis(500)),
            )
            .expect(3)
            .mount(&server)
            .await;

        let result = client_for(&server, Some("secret"), Duration::from_millis(50))
            .chat(&request())
            .await;

        assert_eq!(result, Err(AiError::Timeout));
    }

    #[tokio::test]
    async fn does_not_retry_authentication_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server, Some("wrong"), Duration::from_secs(5))
            .chat(&request())
            .await;

        assert_eq!(result, Err(AiError::Authentication));
    }

    #[tokio::test]
    async fn does_not_retry_schema_validation_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": "nope" })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server, Some("secret"), Duration::from_secs(5))
            .chat(&request())
            .await;

        assert!(matches!(result, Err(AiError::SchemaValidation(_))));
    }

    #[tokio::test]
    async fn missing_api_key_is_a_configuration_error_without_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server, None, Duration::from_secs(5))
            .chat(&request())
            .await;

        assert!(matches!(result, Err(AiError::Configuration(_))));
    }
}
