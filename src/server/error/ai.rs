use thiserror::Error;

/// Failures of the chat-completion client.
///
/// Only `Timeout`, `RateLimit` and 5xx `Upstream` errors are transient; everything
/// else is returned to the caller on the first attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AiError {
    /// Missing API key or request parameters outside their allowed ranges.
    #[error("AI client configuration error: {0}")]
    Configuration(String),

    /// The provider rejected the API key (401).
    #[error("AI provider rejected the API key")]
    Authentication,

    /// The provider is throttling requests (429).
    #[error("AI provider rate limit exceeded")]
    RateLimit,

    /// The request timed out locally or the provider answered 408.
    #[error("AI request timed out")]
    Timeout,

    /// Any other non-success HTTP status.
    #[error("AI provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The response body is not JSON or carries no usable message.
    #[error("AI response format error: {0}")]
    ResponseFormat(String),

    /// The JSON does not match the expected chat-completion or flashcard shape.
    #[error("AI response schema validation failed: {0}")]
    SchemaValidation(String),

    /// Connection-level failure that is neither a timeout nor an HTTP status.
    #[error("AI transport error: {0}")]
    Transport(String),
}

impl AiError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout | Self::RateLimit => true,
            Self::Upstream { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Maps a non-success HTTP status to its error category.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => Self::Authentication,
            408 => Self::Timeout,
            429 => Self::RateLimit,
            status => Self::Upstream { status, body },
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}
