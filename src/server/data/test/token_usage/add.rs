use super::*;

/// Tests that repeated additions on one day accumulate into a single row.
///
/// Expected: Ok with one row holding the sum
#[tokio::test]
async fn accumulates_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let today = Utc::now().date_naive();

    let repo = TokenUsageRepository::new(db);
    repo.add(user.id, today, 100).await?;
    repo.add(user.id, today, 50).await?;

    let usage = repo.get_since(user.id, today).await?;
    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].tokens_used, 150);

    Ok(())
}

/// Tests that days before the cutoff are excluded.
///
/// Expected: Ok with only the recent day
#[tokio::test]
async fn excludes_days_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let today = Utc::now().date_naive();

    let repo = TokenUsageRepository::new(db);
    repo.add(user.id, today - Duration::days(40), 10).await?;
    repo.add(user.id, today, 20).await?;

    let usage = repo.get_since(user.id, today - Duration::days(29)).await?;
    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].date, today);

    Ok(())
}
