use std::marker::PhantomData;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};

use super::{body_json, test_state};
use crate::{
    model::card::{CardStatus, UpdateCardStatusDto},
    server::{controller::card::update_card_status, model::auth::AuthUser},
};

/// Tests accepting a pending card through the status endpoint.
///
/// Expected: 200 with status "accepted" and a non-null review_finished_at
#[tokio::test]
async fn accepting_pending_card_returns_finished_review() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let deck = factory::create_deck(db, user.id).await.unwrap();
    let card = factory::create_card(db, deck.id).await.unwrap();

    let response = update_card_status(
        State(test_state(db)),
        AuthUser::from_entity(user),
        WithRejection(Path(card.id), PhantomData),
        WithRejection(
            Json(UpdateCardStatusDto {
                status: CardStatus::Accepted,
            }),
            PhantomData,
        ),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "accepted");
    assert_ne!(body["review_finished_at"], Value::Null);
}

/// Tests that another user's card cannot be reviewed.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn updating_foreign_card_status_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await.unwrap();
    let other = factory::create_user(db).await.unwrap();
    let deck = factory::create_deck(db, owner.id).await.unwrap();
    let card = factory::create_card(db, deck.id).await.unwrap();

    let result = update_card_status(
        State(test_state(db)),
        AuthUser::from_entity(other),
        WithRejection(Path(card.id), PhantomData),
        WithRejection(
            Json(UpdateCardStatusDto {
                status: CardStatus::Rejected,
            }),
            PhantomData,
        ),
    )
    .await;

    let status = match result {
        Ok(response) => response.into_response().status(),
        Err(err) => err.into_response().status(),
    };
    assert_eq!(status, StatusCode::NOT_FOUND);
}
