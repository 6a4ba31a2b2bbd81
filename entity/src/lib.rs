pub mod prelude;

pub mod ai_job;
pub mod ai_metric;
pub mod auth_session;
pub mod card;
pub mod category;
pub mod deck;
pub mod deck_category;
pub mod token_usage;
pub mod user;
