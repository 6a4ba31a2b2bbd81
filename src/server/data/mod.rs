//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories are generic over `ConnectionTrait` so the same
//! queries run against the pool or inside a transaction. They return entity models or
//! domain models and never DTOs.

pub mod ai_job;
pub mod ai_metric;
pub mod auth_session;
pub mod card;
pub mod category;
pub mod deck;
pub mod deck_category;
pub mod token_usage;
pub mod user;

#[cfg(test)]
mod test;
