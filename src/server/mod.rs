//! Fiszki backend: REST API for decks, cards, categories, accounts and AI generation.
//!
//! Built on axum and SeaORM. Flashcard generation goes through an
//! OpenRouter-compatible chat-completion API reached with reqwest.
//!
//! # Layers
//!
//! - `controller/` - axum handlers. They extract the session user, run `AuthGuard` ownership checks and map DTOs.
//! - `service/` - validation, transactions and the AI job lifecycle
//! - `data/` - one repository per entity, generic over the connection so it works inside transactions
//! - `model/` - domain types and operation params
//! - `error/` - `AppError` and its HTTP mapping
//! - `middleware/` - cookie session authentication with refresh-token rotation
//!
//! `config`, `state`, `startup` and `router` wire these together. `startup` connects,
//! migrates, seeds categories and builds the AI client. `router` registers every
//! route with OpenAPI docs served at `/api/docs`.
//!
//! A request passes the auth middleware, then a controller checks ownership and
//! hands typed params to a service. Services return domain models, which the
//! controller converts to DTOs.
//!
//! Only compiled with the `server` feature.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
