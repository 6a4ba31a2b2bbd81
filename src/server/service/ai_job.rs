//! Card generation jobs.
//!
//! A job is recorded before the external call so every attempt leaves an audit row.
//! It then moves `pending → running → succeeded | failed`. Cards are inserted in the
//! same transaction that marks the job succeeded, so a failed job never owns cards.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use std::time::Instant;
use uuid::Uuid;

use crate::server::{
    data::{
        ai_job::AiJobRepository, ai_metric::AiMetricRepository, card::CardRepository,
        token_usage::TokenUsageRepository,
    },
    error::AppError,
    model::{
        ai_job::{AiJob, AiJobDetail, AiOutcome, CreateAiJobParam},
        card::{NewGeneratedCard, MAX_SOURCE_FRAGMENT_LEN},
    },
    service::ai::{
        flashcards::{build_request, parse_flashcards, truncate_chars},
        AiClient,
    },
};

pub struct AiJobService<'a> {
    db: &'a DatabaseConnection,
    ai: &'a AiClient,
}

impl<'a> AiJobService<'a> {
    pub fn new(db: &'a DatabaseConnection, ai: &'a AiClient) -> Self {
        Self { db, ai }
    }

    /// Generates cards for a deck from source text.
    ///
    /// Runs the whole job synchronously: records it, calls the chat-completion API,
    /// validates exactly `requested_card_count` cards and stores them. Latency and
    /// outcome are recorded for every run, and token usage for successful ones.
    ///
    /// # Returns
    /// - `Ok(AiJob)` - The succeeded job
    /// - `Err(AppError::AiErr)` - The external call or its output failed; the job is marked failed
    /// - `Err(AppError::GenerationFailed)` - Storing the result failed; the job is marked failed
    pub async fn generate(&self, param: CreateAiJobParam) -> Result<AiJob, AppError> {
        let jobs = AiJobRepository::new(self.db);
        let job = jobs.create(&param, self.ai.model()).await?;

        tracing::info!(
            job_id = %job.id,
            deck_id = %job.deck_id,
            requested = job.requested_card_count,
            "AI job created"
        );

        let started = Instant::now();
        let result = self.run(&job).await;
        let latency_ms = i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX);

        match result {
            Ok(done) => {
                tracing::info!(
                    job_id = %done.id,
                    cards = done.actual_card_count.unwrap_or(0),
                    latency_ms,
                    "AI job succeeded"
                );
                self.record_success(&done, latency_ms).await;
                Ok(done)
            }
            Err(err) => {
                tracing::error!(job_id = %job.id, latency_ms, "AI job failed: {}", err);

                if let Err(mark_err) = jobs
                    .mark_failed(job.id, &err.to_string(), Utc::now())
                    .await
                {
                    tracing::error!(
                        job_id = %job.id,
                        "Failed to mark AI job failed: {}",
                        mark_err
                    );
                }
                if let Err(metric_err) = AiMetricRepository::new(self.db)
                    .record(job.id, latency_ms, AiOutcome::Failure)
                    .await
                {
                    tracing::warn!(job_id = %job.id, "Failed to record AI metric: {}", metric_err);
                }

                Err(err)
            }
        }
    }

    async fn run(&self, job: &AiJob) -> Result<AiJob, AppError> {
        AiJobRepository::new(self.db)
            .mark_running(job.id, Utc::now())
            .await
            .map_err(storage_failure)?;

        tracing::info!(job_id = %job.id, model = %job.model, "AI job running");

        let count = job.requested_card_count.max(0) as usize;
        let request = build_request(&job.model, &job.input_text, count);
        let completion = self.ai.chat(&request).await?;
        let generated = parse_flashcards(completion.content(), count)?;

        let tokens_used = completion
            .total_tokens()
            .map(|tokens| i32::try_from(tokens).unwrap_or(i32::MAX));
        let source_fragment = truncate_chars(&job.input_text, MAX_SOURCE_FRAGMENT_LEN);
        let cards = generated
            .into_iter()
            .map(|card| NewGeneratedCard {
                question: card.question,
                answer: card.answer,
            })
            .collect();

        let now = Utc::now();
        let txn = self.db.begin().await.map_err(storage_failure)?;

        let inserted = CardRepository::new(&txn)
            .create_many(job.deck_id, job.id, Some(source_fragment), cards, now)
            .await
            .map_err(storage_failure)?;
        let done = AiJobRepository::new(&txn)
            .mark_succeeded(job.id, inserted as i32, tokens_used, now)
            .await
            .map_err(storage_failure)?;

        txn.commit().await.map_err(storage_failure)?;

        Ok(done)
    }

    /// Records the success metric and token usage. Failures here are logged only,
    /// the job has already committed.
    async fn record_success(&self, job: &AiJob, latency_ms: i64) {
        if let Err(err) = AiMetricRepository::new(self.db)
            .record(job.id, latency_ms, AiOutcome::Success)
            .await
        {
            tracing::warn!(job_id = %job.id, "Failed to record AI metric: {}", err);
        }

        let tokens = i64::from(job.tokens_used.unwrap_or(0));
        if tokens > 0 {
            let today = Utc::now().date_naive();
            if let Err(err) = TokenUsageRepository::new(self.db)
                .add(job.user_id, today, tokens)
                .await
            {
                tracing::warn!(job_id = %job.id, "Failed to record token usage: {}", err);
            }
        }
    }

    /// Gets every job of a deck, newest first
    pub async fn list(&self, deck_id: Uuid) -> Result<Vec<AiJob>, AppError> {
        Ok(AiJobRepository::new(self.db).get_by_deck(deck_id).await?)
    }

    /// Gets a job of a deck with the cards it produced
    pub async fn get(&self, deck_id: Uuid, job_id: Uuid) -> Result<AiJobDetail, AppError> {
        let job = AiJobRepository::new(self.db)
            .find_in_deck(deck_id, job_id)
            .await?
            .ok_or_else(|| AppError::NotFound("AI job not found".to_string()))?;

        let cards = CardRepository::new(self.db).get_by_job(job_id).await?;

        Ok(AiJobDetail { job, cards })
    }
}

fn storage_failure(err: DbErr) -> AppError {
    AppError::GenerationFailed(err.to_string())
}
