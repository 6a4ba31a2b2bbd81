use super::*;

/// Tests accepting a card that was opened a minute ago.
///
/// Expected: Ok with finish stamp and 60 seconds spent
#[tokio::test]
async fn stores_review_stamps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, cards) = factory::helpers::create_deck_with_cards(db, 1).await?;
    let now = Utc::now();
    let started = now - Duration::seconds(60);
    let stamps = ReviewStamps::for_transition(CardStatus::Accepted, Some(started), now);

    let repo = CardRepository::new(db);
    let card = repo
        .update_status(cards[0].id, CardStatus::Accepted, stamps, now)
        .await?
        .unwrap();

    assert_eq!(card.status, CardStatus::Accepted);
    assert!(card.review_finished_at.is_some());
    assert_eq!(card.time_spent, Some(60));

    Ok(())
}

/// Tests that a missing card is reported as None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = CardRepository::new(db);
    let result = repo
        .update_status(
            uuid::Uuid::new_v4(),
            CardStatus::Rejected,
            ReviewStamps::for_transition(CardStatus::Rejected, None, now),
            now,
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
