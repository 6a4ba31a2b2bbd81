mod ai_job;
mod auth;
mod deck;
