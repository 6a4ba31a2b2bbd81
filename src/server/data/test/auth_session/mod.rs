use crate::server::data::auth_session::{AuthSessionRepository, SessionHashes};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod rotate;

fn hashes(suffix: &str, access_ttl: Duration) -> SessionHashes {
    let now = Utc::now();
    SessionHashes {
        access_token_hash: format!("access-{}", suffix),
        refresh_token_hash: format!("refresh-{}", suffix),
        access_expires_at: now + access_ttl,
        refresh_expires_at: now + Duration::days(7),
    }
}
