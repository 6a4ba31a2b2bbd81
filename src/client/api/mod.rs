//! Browser-side calls to the JSON API.

#[cfg(feature = "web")]
pub mod ai_job;
#[cfg(feature = "web")]
pub mod auth;
#[cfg(feature = "web")]
pub mod card;
#[cfg(feature = "web")]
pub mod category;
#[cfg(feature = "web")]
pub mod deck;
#[cfg(feature = "web")]
pub mod helper;
#[cfg(feature = "web")]
pub mod usage;
