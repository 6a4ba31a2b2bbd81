//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! input from controllers into services.

pub mod ai_job;
pub mod auth;
pub mod card;
pub mod category;
pub mod deck;
pub mod pagination;
pub mod usage;
