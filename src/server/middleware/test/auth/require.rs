use super::*;

/// Tests that the owner passes deck, card and job checks together.
///
/// Expected: Ok(())
#[tokio::test]
async fn owner_passes_all_checks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, deck, cards) = factory::helpers::create_deck_with_cards(db, 1).await?;
    let job = factory::create_ai_job(db, deck.id, user.id).await?;
    let user = auth_user(&user);

    AuthGuard::new(db, &user)
        .require(&[
            Permission::OwnsDeck(deck.id),
            Permission::OwnsCard(cards[0].id),
            Permission::OwnsCardInDeck(deck.id, cards[0].id),
            Permission::OwnsAiJob(deck.id, job.id),
        ])
        .await
}

/// Tests that another user's deck is reported as not found.
///
/// Expected: Err(AppError::NotFound("Deck not found"))
#[tokio::test]
async fn foreign_deck_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::helpers::create_deck_with_owner(db).await?;
    let intruder = factory::create_user(db).await?;
    let intruder = auth_user(&intruder);

    let result = AuthGuard::new(db, &intruder)
        .require(&[Permission::OwnsDeck(deck.id)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Deck not found"));

    Ok(())
}

/// Tests that a card in another user's deck is reported as not found.
///
/// Expected: Err(AppError::NotFound("Card not found"))
#[tokio::test]
async fn foreign_card_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, cards) = factory::helpers::create_deck_with_cards(db, 1).await?;
    let intruder = factory::create_user(db).await?;
    let intruder = auth_user(&intruder);

    let result = AuthGuard::new(db, &intruder)
        .require(&[Permission::OwnsCard(cards[0].id)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Card not found"));

    Ok(())
}

/// Tests that a card addressed through the wrong deck fails even for its owner.
///
/// Expected: Err(AppError::NotFound("Card not found"))
#[tokio::test]
async fn card_through_wrong_deck_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, cards) = factory::helpers::create_deck_with_cards(db, 1).await?;
    let other_deck = factory::create_deck(db, user.id).await?;
    let user = auth_user(&user);

    let result = AuthGuard::new(db, &user)
        .require(&[Permission::OwnsCardInDeck(other_deck.id, cards[0].id)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Card not found"));

    Ok(())
}

/// Tests a missing job in an owned deck.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_job_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, deck) = factory::helpers::create_deck_with_owner(db).await?;
    let user = auth_user(&user);

    let result = AuthGuard::new(db, &user)
        .require(&[Permission::OwnsAiJob(deck.id, Uuid::new_v4())])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that an empty permission list passes.
///
/// Expected: Ok(())
#[tokio::test]
async fn empty_permission_list_passes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let user = auth_user(&user);

    AuthGuard::new(db, &user).require(&[]).await
}
