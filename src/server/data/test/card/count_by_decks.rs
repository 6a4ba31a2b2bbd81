use super::*;

/// Tests grouped card counts across several decks.
///
/// Expected: Ok with counts for decks that have cards and no entry for empty decks
#[tokio::test]
async fn counts_cards_per_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first, _) = factory::helpers::create_deck_with_cards(db, 3).await?;
    let (_, second, _) = factory::helpers::create_deck_with_cards(db, 1).await?;
    let (_, empty) = factory::helpers::create_deck_with_owner(db).await?;

    let repo = CardRepository::new(db);
    let counts = repo
        .count_by_decks(&[first.id, second.id, empty.id])
        .await?;

    assert_eq!(counts.get(&first.id), Some(&3));
    assert_eq!(counts.get(&second.id), Some(&1));
    assert_eq!(counts.get(&empty.id), None);

    Ok(())
}
