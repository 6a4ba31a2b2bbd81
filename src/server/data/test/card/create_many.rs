use super::*;

/// Tests inserting generated cards for a job.
///
/// Verifies every card is pending, carries the job id and source fragment, and that
/// reading them back by job preserves the generated order.
///
/// Expected: Ok with three cards in order
#[tokio::test]
async fn inserts_cards_in_generated_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, deck) = factory::helpers::create_deck_with_owner(db).await?;
    let job = factory::create_ai_job(db, deck.id, user.id).await?;

    let generated = (1..=3)
        .map(|i| NewGeneratedCard {
            question: format!("Q{}", i),
            answer: format!("A{}", i),
        })
        .collect();

    let repo = CardRepository::new(db);
    let inserted = repo
        .create_many(deck.id, job.id, Some("notes".to_string()), generated, Utc::now())
        .await?;
    assert_eq!(inserted, 3);

    let cards = repo.get_by_job(job.id).await?;
    let questions: Vec<_> = cards.iter().map(|c| c.question.as_str()).collect();
    assert_eq!(questions, vec!["Q1", "Q2", "Q3"]);
    assert!(cards.iter().all(|c| c.status == CardStatus::Pending
        && c.job_id == Some(job.id)
        && c.source_fragment.as_deref() == Some("notes")));

    Ok(())
}

/// Tests that an empty batch is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_batch_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, deck) = factory::helpers::create_deck_with_owner(db).await?;
    let job = factory::create_ai_job(db, deck.id, user.id).await?;

    let repo = CardRepository::new(db);
    let inserted = repo
        .create_many(deck.id, job.id, None, Vec::new(), Utc::now())
        .await?;

    assert_eq!(inserted, 0);
    assert_eq!(repo.count_by_deck(deck.id).await?, 0);

    Ok(())
}
