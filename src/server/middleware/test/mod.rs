mod auth;
mod session;
