use crate::{
    model::{ai_job::AiJobStatus, card::CardStatus},
    server::{
        error::AppError,
        model::ai_job::CreateAiJobParam,
        service::{
            ai::{AiClient, AiClientConfig, RetryPolicy},
            ai_job::AiJobService,
        },
    },
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::json;
use std::time::Duration;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> AiClient {
    AiClient::new(
        reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap(),
        AiClientConfig {
            api_key: Some("secret".to_string()),
            base_url: server.uri(),
            model: "test/model".to_string(),
            site_url: "http://localhost:8080".to_string(),
            site_name: "Fiszki".to_string(),
        },
        RetryPolicy {
            max_attempts: 2,
            base_delay: Duration::from_millis(5),
        },
    )
}

fn completion(content: String, total_tokens: u32) -> serde_json::Value {
    json!({
        "id": "gen-1",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "test/model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": total_tokens - 10, "total_tokens": total_tokens }
    })
}

fn flashcards(count: usize) -> String {
    let cards: Vec<_> = (1..=count)
        .map(|i| json!({ "question": format!("Q{}", i), "answer": format!("A{}", i) }))
        .collect();
    json!({ "flashcards": cards }).to_string()
}

async fn setup(db: &DatabaseConnection, count: i32) -> CreateAiJobParam {
    let (user, deck) = factory::helpers::create_deck_with_owner(db).await.unwrap();
    CreateAiJobParam {
        deck_id: deck.id,
        user_id: user.id,
        input_text: "Mitochondria are the powerhouse of the cell.".to_string(),
        requested_card_count: count,
    }
}

async fn card_count(db: &DatabaseConnection) -> u64 {
    entity::prelude::Card::find().count(db).await.unwrap()
}

/// Tests a successful generation end to end.
///
/// Verifies the structured-output request pins the card count, exactly K pending
/// cards are linked to the job, and metrics and token usage are recorded.
///
/// Expected: succeeded job with three cards
#[tokio::test]
async fn successful_job_inserts_exactly_requested_cards() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "model": "test/model",
            "response_format": {
                "type": "json_schema",
                "json_schema": { "name": "flashcards", "strict": true }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(flashcards(3), 150)))
        .expect(1)
        .mount(&server)
        .await;

    let param = setup(db, 3).await;
    let client = client_for(&server);

    let job = AiJobService::new(db, &client)
        .generate(param.clone())
        .await
        .unwrap();

    assert_eq!(job.status, AiJobStatus::Succeeded);
    assert_eq!(job.actual_card_count, Some(3));
    assert_eq!(job.tokens_used, Some(150));
    assert!(job.started_at.is_some() && job.finished_at.is_some());

    let detail = AiJobService::new(db, &client)
        .get(param.deck_id, job.id)
        .await
        .unwrap();
    assert_eq!(detail.cards.len(), 3);
    assert!(detail
        .cards
        .iter()
        .all(|c| c.status == CardStatus::Pending && c.job_id == Some(job.id)));
    assert_eq!(
        detail.cards[0].source_fragment.as_deref(),
        Some(param.input_text.as_str())
    );

    let metric = entity::prelude::AiMetric::find_by_id(job.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(metric.outcome, "succeeded");

    let usage = entity::prelude::TokenUsage::find().all(db).await.unwrap();
    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].tokens_used, 150);
}

/// Tests that a count mismatch fails the job without inserting cards.
///
/// Expected: AiErr, failed job with message, no cards, failure metric
#[tokio::test]
async fn wrong_card_count_fails_job() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(flashcards(2), 80)))
        .expect(1)
        .mount(&server)
        .await;

    let param = setup(db, 3).await;
    let client = client_for(&server);
    let service = AiJobService::new(db, &client);

    let result = service.generate(param.clone()).await;
    assert!(matches!(result, Err(AppError::AiErr(_))));

    let jobs = service.list(param.deck_id).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].status, AiJobStatus::Failed);
    assert!(jobs[0].error_message.is_some());
    assert!(jobs[0].finished_at.is_some());
    assert_eq!(card_count(db).await, 0);

    let metric = entity::prelude::AiMetric::find_by_id(jobs[0].id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(metric.outcome, "failed");
    assert_eq!(
        entity::prelude::TokenUsage::find().count(db).await.unwrap(),
        0
    );
}

/// Tests that an upstream outage fails the job after retries.
///
/// Expected: two attempts, failed job, no cards
#[tokio::test]
async fn upstream_outage_fails_job_after_retries() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(502))
        .expect(2)
        .mount(&server)
        .await;

    let param = setup(db, 1).await;
    let client = client_for(&server);
    let service = AiJobService::new(db, &client);

    assert!(service.generate(param.clone()).await.is_err());

    let jobs = service.list(param.deck_id).await.unwrap();
    assert_eq!(jobs[0].status, AiJobStatus::Failed);
    assert_eq!(card_count(db).await, 0);
}

/// Tests looking up a job through a different deck.
///
/// Expected: NotFound
#[tokio::test]
async fn job_from_other_deck_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = MockServer::start().await;
    let (user, deck) = factory::helpers::create_deck_with_owner(db).await.unwrap();
    let job = factory::create_ai_job(db, deck.id, user.id).await.unwrap();
    let client = client_for(&server);

    let result = AiJobService::new(db, &client).get(Uuid::new_v4(), job.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
