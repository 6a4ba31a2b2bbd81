use super::*;

/// Tests that replacing links swaps the deck's categories.
///
/// Expected: Ok with only the replacement category linked
#[tokio::test]
async fn reflects_replaced_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let old = factory::category::CategoryFactory::new(db)
        .name("Old")
        .build()
        .await?;
    let new = factory::category::CategoryFactory::new(db)
        .name("New")
        .build()
        .await?;
    let deck = factory::deck::DeckFactory::new(db, user.id)
        .categories(vec![old.id])
        .build()
        .await?;

    DeckCategoryRepository::new(db)
        .replace(deck.id, &[new.id])
        .await?;

    let categories = CategoryRepository::new(db).get_for_deck(deck.id).await?;
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["New"]);

    Ok(())
}
