use crate::{
    model::deck::{CreateDeckDto, UpdateDeckDto},
    server::{
        error::AppError,
        model::{
            deck::{CreateDeckParam, DeckListParam, DeckSort, UpdateDeckParam},
            pagination::PageRequest,
        },
        service::deck::DeckService,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

fn create_param(user_id: Uuid, name: &str, category_ids: Vec<Uuid>) -> CreateDeckParam {
    CreateDeckParam::from_dto(
        user_id,
        CreateDeckDto {
            name: name.to_string(),
            description: Some(String::new()),
            card_limit: Some(50),
            category_ids,
        },
    )
    .unwrap()
}

/// Tests creating a deck with no categories.
///
/// Expected: deck with zero cards, no categories and an empty description stored as None
#[tokio::test]
async fn creates_empty_deck() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();

    let detail = DeckService::new(db)
        .create(create_param(user.id, "Spanish", vec![]))
        .await
        .unwrap();

    assert_eq!(detail.card_count, 0);
    assert!(detail.categories.is_empty());
    assert_eq!(detail.deck.description, None);
    assert_eq!(detail.deck.card_limit, Some(50));
}

/// Tests that an unknown category rolls back the whole create.
///
/// Expected: BadRequest and no deck row
#[tokio::test]
async fn unknown_category_rolls_back() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let known = factory::create_category(db).await.unwrap();

    let result = DeckService::new(db)
        .create(create_param(user.id, "Spanish", vec![known.id, Uuid::new_v4()]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Unknown category"));
    assert_eq!(entity::prelude::Deck::find().count(db).await.unwrap(), 0);
}

/// Tests that category links come back sorted by name.
///
/// Expected: categories ordered alphabetically
#[tokio::test]
async fn returns_categories_sorted() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let zoology = factory::category::CategoryFactory::new(db)
        .name("Zoology")
        .build()
        .await
        .unwrap();
    let art = factory::category::CategoryFactory::new(db)
        .name("Art")
        .build()
        .await
        .unwrap();

    let service = DeckService::new(db);
    let created = service
        .create(create_param(user.id, "Mixed", vec![zoology.id, art.id]))
        .await
        .unwrap();
    let fetched = service.get(created.deck.id).await.unwrap();

    let names: Vec<_> = fetched.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Art", "Zoology"]);
    assert_eq!(created.categories, fetched.categories);
}

/// Tests the list envelope with card counts.
///
/// Expected: summaries carry per-deck card counts
#[tokio::test]
async fn list_includes_card_counts() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, deck, _) = factory::helpers::create_deck_with_cards(db, 4)
        .await
        .unwrap();
    let empty = factory::create_deck(db, user.id).await.unwrap();

    let page = DeckService::new(db)
        .list(DeckListParam {
            user_id: user.id,
            page: PageRequest::new(None, None, 12, 50).unwrap(),
            sort: DeckSort::default(),
            category_ids: vec![],
        })
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    let count_of = |id| {
        page.decks
            .iter()
            .find(|s| s.deck.id == id)
            .map(|s| s.card_count)
    };
    assert_eq!(count_of(deck.id), Some(4));
    assert_eq!(count_of(empty.id), Some(0));
}

/// Tests that an update replaces category links and keeps other fields.
///
/// Expected: only the new category linked, name unchanged
#[tokio::test]
async fn update_replaces_categories() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let old = factory::create_category(db).await.unwrap();
    let new = factory::create_category(db).await.unwrap();
    let deck = factory::deck::DeckFactory::new(db, user.id)
        .name("Biology")
        .categories(vec![old.id])
        .build()
        .await
        .unwrap();

    let param = UpdateDeckParam::from_dto(UpdateDeckDto {
        category_ids: Some(vec![new.id]),
        ..Default::default()
    })
    .unwrap();
    let updated = DeckService::new(db).update(deck.id, param).await.unwrap();

    assert_eq!(updated.deck.name, "Biology");
    let ids: Vec<_> = updated.categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![new.id]);
}

/// Tests that deleting a deck removes its cards, links, jobs and metrics.
///
/// Expected: every dependent table is empty afterwards
#[tokio::test]
async fn delete_removes_dependents() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let category = factory::create_category(db).await.unwrap();
    let deck = factory::deck::DeckFactory::new(db, user.id)
        .categories(vec![category.id])
        .build()
        .await
        .unwrap();
    let job = factory::create_ai_job(db, deck.id, user.id).await.unwrap();
    factory::card::CardFactory::new(db, deck.id)
        .job_id(Some(job.id))
        .build()
        .await
        .unwrap();
    factory::create_card(db, deck.id).await.unwrap();
    crate::server::data::ai_metric::AiMetricRepository::new(db)
        .record(
            job.id,
            10,
            crate::server::model::ai_job::AiOutcome::Success,
        )
        .await
        .unwrap();

    DeckService::new(db).delete(deck.id).await.unwrap();

    assert_eq!(entity::prelude::Deck::find().count(db).await.unwrap(), 0);
    assert_eq!(entity::prelude::Card::find().count(db).await.unwrap(), 0);
    assert_eq!(entity::prelude::DeckCategory::find().count(db).await.unwrap(), 0);
    assert_eq!(entity::prelude::AiJob::find().count(db).await.unwrap(), 0);
    assert_eq!(entity::prelude::AiMetric::find().count(db).await.unwrap(), 0);
    assert_eq!(entity::prelude::Category::find().count(db).await.unwrap(), 1);
}

/// Tests deleting a deck that does not exist.
///
/// Expected: NotFound
#[tokio::test]
async fn delete_missing_deck_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DeckService::new(db).delete(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
