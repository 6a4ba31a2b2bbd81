use crate::server::{
    data::auth_session::{AuthSessionRepository, SessionHashes},
    error::{auth::AuthError, AppError},
    service::auth::{hash_token, AuthService},
};
use chrono::{Duration, Utc};
use test_utils::builder::TestBuilder;

/// Tests register followed by login.
///
/// Expected: login succeeds with the normalized email and returns two distinct tokens
#[tokio::test]
async fn registers_and_logs_in() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    let user = service
        .register("Learner@Example.com", "s3cret-pass")
        .await
        .unwrap();
    assert_eq!(user.email, "learner@example.com");

    let (logged_in, tokens) = service
        .login("learner@example.com", "s3cret-pass")
        .await
        .unwrap();
    assert_eq!(logged_in.id, user.id);
    assert_ne!(tokens.access_token, tokens.refresh_token);
}

/// Tests that duplicate registration and a short password are rejected.
///
/// Expected: BadRequest for both
#[tokio::test]
async fn rejects_duplicate_email_and_short_password() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    service.register("a@example.com", "long-enough").await.unwrap();

    assert!(matches!(
        service.register("A@example.com", "long-enough").await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.register("b@example.com", "short").await,
        Err(AppError::BadRequest(_))
    ));
}

/// Tests that a wrong password is an authentication error.
///
/// Expected: InvalidCredentials
#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);
    service.register("a@example.com", "long-enough").await.unwrap();

    let result = service.login("a@example.com", "not-the-password").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
}

/// Tests that a live access token authenticates without rotation.
///
/// Expected: the user, with no refreshed tokens
#[tokio::test]
async fn access_token_authenticates() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);
    let user = service.register("a@example.com", "long-enough").await.unwrap();
    let (_, tokens) = service.login("a@example.com", "long-enough").await.unwrap();

    let auth = service
        .authenticate(Some(&tokens.access_token), None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(auth.user.id, user.id);
    assert!(auth.refreshed.is_none());
}

/// Tests that an expired access token with a live refresh token rotates both.
///
/// Expected: new tokens issued and the old refresh token no longer works
#[tokio::test]
async fn expired_access_token_rotates_with_refresh() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);
    let user = service.register("a@example.com", "long-enough").await.unwrap();

    let now = Utc::now();
    AuthSessionRepository::new(db)
        .create(
            user.id,
            SessionHashes {
                access_token_hash: hash_token("old-access"),
                refresh_token_hash: hash_token("old-refresh"),
                access_expires_at: now - Duration::minutes(1),
                refresh_expires_at: now + Duration::days(1),
            },
        )
        .await
        .unwrap();

    let auth = service
        .authenticate(Some("old-access"), Some("old-refresh"))
        .await
        .unwrap()
        .unwrap();
    let refreshed = auth.refreshed.unwrap();
    assert_eq!(auth.user.id, user.id);

    assert!(service
        .authenticate(None, Some("old-refresh"))
        .await
        .unwrap()
        .is_none());
    assert!(service
        .authenticate(Some(&refreshed.access_token), None)
        .await
        .unwrap()
        .is_some());
}

/// Tests that logout ends the session.
///
/// Expected: tokens stop authenticating
#[tokio::test]
async fn logout_ends_session() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);
    service.register("a@example.com", "long-enough").await.unwrap();
    let (_, tokens) = service.login("a@example.com", "long-enough").await.unwrap();

    service
        .logout(Some(&tokens.access_token), Some(&tokens.refresh_token))
        .await
        .unwrap();

    assert!(service
        .authenticate(Some(&tokens.access_token), Some(&tokens.refresh_token))
        .await
        .unwrap()
        .is_none());
}
