mod ai_job;
mod auth_session;
mod card;
mod category;
mod deck;
mod token_usage;
