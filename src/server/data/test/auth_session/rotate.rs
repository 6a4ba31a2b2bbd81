use super::*;

/// Tests that rotation invalidates the previous token hashes.
///
/// Expected: Ok with old hashes unresolvable and new hashes resolving to the same session
#[tokio::test]
async fn replaces_both_hashes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = AuthSessionRepository::new(db);
    let session = repo.create(user.id, hashes("old", Duration::hours(1))).await?;

    let rotated = repo
        .rotate(session.clone(), hashes("new", Duration::hours(1)))
        .await?;

    assert_eq!(rotated.id, session.id);
    assert!(repo.find_by_access_hash("access-old").await?.is_none());
    assert!(repo.find_by_refresh_hash("refresh-old").await?.is_none());
    assert_eq!(
        repo.find_by_refresh_hash("refresh-new").await?.map(|s| s.id),
        Some(session.id)
    );

    Ok(())
}

/// Tests that only sessions with an expired refresh token are purged.
///
/// Expected: Ok with one session removed
#[tokio::test]
async fn delete_expired_keeps_live_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = AuthSessionRepository::new(db);
    repo.create(user.id, hashes("live", Duration::hours(1))).await?;

    let mut stale = hashes("stale", Duration::hours(-2));
    stale.refresh_expires_at = Utc::now() - Duration::hours(1);
    repo.create(user.id, stale).await?;

    let removed = repo.delete_expired(Utc::now()).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_access_hash("access-live").await?.is_some());

    Ok(())
}
