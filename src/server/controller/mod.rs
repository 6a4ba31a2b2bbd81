//! HTTP request handlers.
//!
//! Controllers extract and validate request data, check ownership with `AuthGuard`,
//! call a service and convert the returned domain model into a DTO.

pub mod ai_job;
pub mod auth;
pub mod card;
pub mod category;
pub mod deck;
pub mod usage;

#[cfg(test)]
mod test;
