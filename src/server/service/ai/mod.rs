//! Chat-completion integration used for card generation.
//!
//! - `client` sends requests to an OpenRouter-compatible endpoint
//! - `retry` holds the bounded exponential backoff loop
//! - `types` defines the wire shapes and their validation
//! - `flashcards` builds the generation prompt and parses its output

pub mod client;
pub mod flashcards;
pub mod retry;
pub mod types;

pub use client::{AiClient, AiClientConfig};
pub use retry::RetryPolicy;
