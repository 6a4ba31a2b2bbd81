//! Request authentication and resource authorization.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
