//! Data transfer objects shared between the server API and the web client.

pub mod ai_job;
pub mod api;
pub mod card;
pub mod category;
pub mod deck;
pub mod usage;
pub mod user;
