use std::str::FromStr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_AI_BASE_URL: &str = "https://openrouter.ai/api";
const DEFAULT_AI_MODEL: &str = "deepseek/deepseek-r1-0528:free";
const DEFAULT_SITE_URL: &str = "http://localhost:8080";
const DEFAULT_SITE_NAME: &str = "Fiszki";

pub struct Config {
    pub database_url: String,

    /// Absent keys are reported when a generation request is made, not at startup.
    pub ai_api_key: Option<String>,
    pub ai_base_url: String,
    pub ai_model: String,
    pub ai_timeout_secs: u64,
    pub ai_max_attempts: u32,
    pub ai_base_delay_ms: u64,

    pub site_url: String,
    pub site_name: String,

    pub cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let ai_base_url = optional_var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|| DEFAULT_AI_BASE_URL.to_string());
        Url::parse(&ai_base_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "OPENROUTER_BASE_URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            ai_api_key: optional_var("OPENROUTER_API_KEY"),
            ai_base_url: ai_base_url.trim_end_matches('/').to_string(),
            ai_model: optional_var("AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            ai_timeout_secs: parse_var("AI_TIMEOUT_SECS", 60)?,
            ai_max_attempts: parse_var("AI_MAX_ATTEMPTS", 3)?,
            ai_base_delay_ms: parse_var("AI_BASE_DELAY_MS", 1000)?,
            site_url: optional_var("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            site_name: optional_var("SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            cookie_secure: parse_var("COOKIE_SECURE", false)?,
        })
    }
}

/// Reads an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}
