use super::*;

/// Tests that unknown ids are silently skipped.
///
/// Expected: Ok with only the existing category
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let found = repo.find_by_ids(&[category.id, Uuid::new_v4()]).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, category.id);

    Ok(())
}

/// Tests that an empty id list does not query.
///
/// Expected: Ok with empty result
#[tokio::test]
async fn empty_ids_return_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}
