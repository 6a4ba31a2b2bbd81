use super::*;

/// Tests the pending → running → succeeded path.
///
/// Expected: Ok with timestamps and counts stamped at each step
#[tokio::test]
async fn moves_through_success_states() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, deck) = factory::helpers::create_deck_with_owner(db).await?;
    let repo = AiJobRepository::new(db);

    let job = repo
        .create(
            &CreateAiJobParam {
                deck_id: deck.id,
                user_id: user.id,
                input_text: "Photosynthesis".to_string(),
                requested_card_count: 3,
            },
            "test/model",
        )
        .await?;
    assert_eq!(job.status, AiJobStatus::Pending);
    assert!(job.started_at.is_none());

    let running = repo.mark_running(job.id, Utc::now()).await?;
    assert_eq!(running.status, AiJobStatus::Running);
    assert!(running.started_at.is_some());

    let done = repo.mark_succeeded(job.id, 3, Some(120), Utc::now()).await?;
    assert_eq!(done.status, AiJobStatus::Succeeded);
    assert_eq!(done.actual_card_count, Some(3));
    assert_eq!(done.tokens_used, Some(120));
    assert!(done.finished_at.is_some());
    assert_eq!(done.input_text, "Photosynthesis");

    Ok(())
}

/// Tests marking a job failed keeps the error message.
///
/// Expected: Ok with failed status and message
#[tokio::test]
async fn records_failure_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, deck) = factory::helpers::create_deck_with_owner(db).await?;
    let job = factory::ai_job::AiJobFactory::new(db, deck.id, user.id)
        .status("running")
        .build()
        .await?;

    let failed = AiJobRepository::new(db)
        .mark_failed(job.id, "upstream timeout", Utc::now())
        .await?;

    assert_eq!(failed.status, AiJobStatus::Failed);
    assert_eq!(failed.error_message.as_deref(), Some("upstream timeout"));
    assert_eq!(failed.actual_card_count, None);

    Ok(())
}

/// Tests that deleting a deck's metrics only touches that deck's jobs.
///
/// Expected: Ok with one metric removed and the other kept
#[tokio::test]
async fn deletes_metrics_for_deck_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, deck) = factory::helpers::create_deck_with_owner(db).await?;
    let other_deck = factory::create_deck(db, user.id).await?;
    let job = factory::create_ai_job(db, deck.id, user.id).await?;
    let other_job = factory::create_ai_job(db, other_deck.id, user.id).await?;

    let metrics = AiMetricRepository::new(db);
    metrics.record(job.id, 900, AiOutcome::Success).await?;
    metrics.record(other_job.id, 400, AiOutcome::Failure).await?;

    let removed = metrics.delete_by_deck(deck.id).await?;

    assert_eq!(removed, 1);
    assert!(metrics.find(job.id).await?.is_none());
    let kept = metrics.find(other_job.id).await?.unwrap();
    assert_eq!(kept.outcome, "failed");

    Ok(())
}
