use std::marker::PhantomData;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::{body_json, test_state};
use crate::{
    model::deck::CreateDeckDto,
    server::{controller::deck::create_deck, model::auth::AuthUser},
};

/// Tests the create deck endpoint response.
///
/// Expected: 201 with card_count 0 and an empty categories array in the JSON body
#[tokio::test]
async fn create_deck_returns_created_json() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();

    let payload = CreateDeckDto {
        name: "Spanish".to_string(),
        description: Some(String::new()),
        card_limit: Some(50),
        category_ids: vec![],
    };

    let response = create_deck(
        State(test_state(db)),
        AuthUser::from_entity(user),
        WithRejection(Json(payload), PhantomData),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Spanish");
    assert_eq!(body["card_count"], json!(0));
    assert_eq!(body["categories"], json!([]));
}

/// Tests that a whitespace-only name is rejected before anything is stored.
///
/// Expected: 400 with the validation message
#[tokio::test]
async fn create_deck_rejects_blank_name() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();

    let payload = CreateDeckDto {
        name: "   ".to_string(),
        description: None,
        card_limit: None,
        category_ids: vec![],
    };

    let result = create_deck(
        State(test_state(db)),
        AuthUser::from_entity(user),
        WithRejection(Json(payload), PhantomData),
    )
    .await;

    let response = match result {
        Ok(_) => panic!("blank deck name was accepted"),
        Err(err) => err.into_response(),
    };
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Deck name is required");
}
