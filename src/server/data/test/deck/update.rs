use super::*;

/// Tests that absent fields are kept and an explicit clear removes the description.
///
/// Expected: Ok with name changed, description cleared, card limit untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let deck = factory::deck::DeckFactory::new(db, user.id)
        .description(Some("Old".to_string()))
        .card_limit(Some(20))
        .build()
        .await?;

    let repo = DeckRepository::new(db);
    let updated = repo
        .update(
            deck.id,
            &UpdateDeckParam {
                name: Some("Renamed".to_string()),
                description: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, None);
    assert_eq!(updated.card_limit, Some(20));
    assert!(updated.updated_at >= deck.updated_at);

    Ok(())
}

/// Tests updating a deck that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db);
    let result = repo
        .update(Uuid::new_v4(), &UpdateDeckParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
