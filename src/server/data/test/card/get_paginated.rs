use super::*;

/// Tests filtering a deck's cards by status.
///
/// Expected: Ok with only accepted cards and a matching total
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck) = factory::helpers::create_deck_with_owner(db).await?;
    factory::card::CardFactory::new(db, deck.id)
        .status("accepted")
        .build()
        .await?;
    factory::create_card(db, deck.id).await?;
    factory::create_card(db, deck.id).await?;

    let repo = CardRepository::new(db);
    let (cards, total) = repo
        .get_paginated(
            deck.id,
            &CardListParam {
                status: Some(CardStatus::Accepted),
                page: 1,
                limit: 50,
            },
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(cards[0].status, CardStatus::Accepted);

    Ok(())
}

/// Tests that cards from other decks are never included.
///
/// Expected: Ok with only the requested deck's cards
#[tokio::test]
async fn excludes_other_decks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, deck, _) = factory::helpers::create_deck_with_cards(db, 2).await?;
    factory::helpers::create_deck_with_cards(db, 3).await?;

    let repo = CardRepository::new(db);
    let (cards, total) = repo
        .get_paginated(
            deck.id,
            &CardListParam {
                status: None,
                page: 1,
                limit: 50,
            },
        )
        .await?;

    assert_eq!(total, 2);
    assert!(cards.iter().all(|c| c.deck_id == deck.id));

    Ok(())
}
