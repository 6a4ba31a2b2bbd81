//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and the chat-completion client
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling multi-step writes atomically
//!
//! Services trust resource ids they receive. Ownership is checked beforehand by
//! `AuthGuard` in the controller.

pub mod ai;
pub mod ai_job;
pub mod auth;
pub mod card;
pub mod category;
pub mod deck;
pub mod usage;

#[cfg(test)]
mod test;
