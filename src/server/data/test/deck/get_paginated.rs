use super::*;

/// Tests that only the requesting user's decks are listed, newest first.
///
/// Expected: Ok with own decks ordered by created_at descending
#[tokio::test]
async fn lists_only_own_decks_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();
    let older = factory::deck::DeckFactory::new(db, owner.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let newer = factory::deck::DeckFactory::new(db, owner.id)
        .created_at(now)
        .build()
        .await?;
    factory::create_deck(db, other.id).await?;

    let repo = DeckRepository::new(db);
    let (decks, total) = repo.get_paginated(&list_param(owner.id, 1, 12)).await?;

    assert_eq!(total, 2);
    let ids: Vec<_> = decks.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests that the second page holds the remainder.
///
/// Expected: Ok with one deck on page 2 of limit 2
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_deck(db, user.id).await?;
    }

    let repo = DeckRepository::new(db);
    let (decks, total) = repo.get_paginated(&list_param(user.id, 2, 2)).await?;

    assert_eq!(total, 3);
    assert_eq!(decks.len(), 1);

    Ok(())
}

/// Tests sorting by name ascending.
///
/// Expected: Ok with decks in alphabetical order
#[tokio::test]
async fn sorts_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for name in ["Geography", "Algebra", "Spanish"] {
        factory::deck::DeckFactory::new(db, user.id)
            .name(name)
            .build()
            .await?;
    }

    let mut param = list_param(user.id, 1, 12);
    param.sort = DeckSort {
        field: DeckSortField::Name,
        order: SortOrder::Asc,
    };

    let repo = DeckRepository::new(db);
    let (decks, _) = repo.get_paginated(&param).await?;

    let names: Vec<_> = decks.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Algebra", "Geography", "Spanish"]);

    Ok(())
}

/// Tests that the category filter matches decks linked to any listed category.
///
/// Expected: Ok with the two linked decks and not the unlinked one
#[tokio::test]
async fn filters_by_any_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deck_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let history = factory::create_category(db).await?;
    let science = factory::create_category(db).await?;
    let first = factory::deck::DeckFactory::new(db, user.id)
        .categories(vec![history.id])
        .build()
        .await?;
    let second = factory::deck::DeckFactory::new(db, user.id)
        .categories(vec![history.id, science.id])
        .build()
        .await?;
    factory::create_deck(db, user.id).await?;

    let mut param = list_param(user.id, 1, 12);
    param.category_ids = vec![history.id, science.id];

    let repo = DeckRepository::new(db);
    let (decks, total) = repo.get_paginated(&param).await?;

    assert_eq!(total, 2);
    assert!(decks.iter().any(|d| d.id == first.id));
    assert!(decks.iter().any(|d| d.id == second.id));

    Ok(())
}
