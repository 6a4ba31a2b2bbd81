use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use crate::{
    model::{
        ai_job::{AiJobCreatedDto, AiJobDetailDto, AiJobDto, CreateAiJobDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            ai_job::{AiJob, CreateAiJobParam},
            auth::AuthUser,
        },
        service::ai_job::AiJobService,
        state::AppState,
    },
};

/// Tag for grouping AI generation endpoints in OpenAPI documentation
pub static AI_JOB_TAG: &str = "ai-job";

/// Generate flashcards from source text.
///
/// Runs the generation job to completion before responding. The new cards are
/// stored as `pending` and linked to the returned job.
///
/// # Access Control
/// - `OwnsDeck` - Deck must belong to the user
///
/// # Arguments
/// - `input_text` - Source text, 1 to 10000 characters after trimming
/// - `requested_card_count` - Exact number of cards to generate, 1 to 100
///
/// # Returns
/// - `202 Accepted` - The succeeded job
/// - `400 Bad Request` - Invalid text or card count
/// - `404 Not Found` - Deck missing or owned by another user
/// - `500 Internal Server Error` - Generation failed; the job is recorded as failed
#[utoipa::path(
    post,
    path = "/api/decks/{id}/ai-jobs",
    tag = AI_JOB_TAG,
    params(("id" = Uuid, Path, description = "Deck ID")),
    request_body = CreateAiJobDto,
    responses(
        (status = 202, description = "Cards generated", body = AiJobCreatedDto),
        (status = 400, description = "Invalid generation request", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Failed to generate cards", body = ErrorDto)
    ),
)]
pub async fn create_ai_job(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(deck_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateAiJobDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsDeck(deck_id)])
        .await?;

    let param =
        CreateAiJobParam::from_dto(deck_id, user.id, payload).map_err(AppError::BadRequest)?;

    let job = AiJobService::new(&state.db, &state.ai_client)
        .generate(param)
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(AiJobCreatedDto {
            job_id: job.id,
            status: job.status,
        }),
    ))
}

/// List a deck's generation jobs, newest first.
///
/// # Access Control
/// - `OwnsDeck` - Deck must belong to the user
///
/// # Returns
/// - `200 OK` - Jobs of the deck
/// - `404 Not Found` - Deck missing or owned by another user
#[utoipa::path(
    get,
    path = "/api/decks/{id}/ai-jobs",
    tag = AI_JOB_TAG,
    params(("id" = Uuid, Path, description = "Deck ID")),
    responses(
        (status = 200, description = "Generation jobs", body = Vec<AiJobDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ai_jobs(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path(deck_id), _): WithRejection<Path<Uuid>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsDeck(deck_id)])
        .await?;

    let jobs = AiJobService::new(&state.db, &state.ai_client)
        .list(deck_id)
        .await?;

    Ok(Json(
        jobs.into_iter().map(AiJob::into_dto).collect::<Vec<_>>(),
    ))
}

/// Get a generation job with its source text and the cards it produced.
///
/// # Access Control
/// - `OwnsAiJob` - Job must belong to the user's deck
///
/// # Returns
/// - `200 OK` - The job and its cards
/// - `404 Not Found` - Deck or job missing, or the job belongs to another deck
#[utoipa::path(
    get,
    path = "/api/decks/{id}/ai-jobs/{job_id}",
    tag = AI_JOB_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID"),
        ("job_id" = Uuid, Path, description = "AI job ID")
    ),
    responses(
        (status = 200, description = "Generation job", body = AiJobDetailDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "AI job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ai_job(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Path((deck_id, job_id)), _): WithRejection<Path<(Uuid, Uuid)>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::OwnsAiJob(deck_id, job_id)])
        .await?;

    let detail = AiJobService::new(&state.db, &state.ai_client)
        .get(deck_id, job_id)
        .await?;

    Ok(Json(detail.into_dto()))
}
