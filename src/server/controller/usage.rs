use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, usage::TokenUsageDto},
    server::{
        error::AppError,
        model::{auth::AuthUser, usage::TokenUsage},
        service::usage::UsageService,
        state::AppState,
    },
};

/// Tag for grouping usage endpoints in OpenAPI documentation
pub static USAGE_TAG: &str = "usage";

/// Get the user's daily token usage for the last 30 days, oldest first.
///
/// Days without generation are omitted.
#[utoipa::path(
    get,
    path = "/api/usage/tokens",
    tag = USAGE_TAG,
    responses(
        (status = 200, description = "Daily token usage", body = Vec<TokenUsageDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_token_usage(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let usage = UsageService::new(&state.db).recent(user.id).await?;

    Ok(Json(
        usage
            .into_iter()
            .map(TokenUsage::into_dto)
            .collect::<Vec<_>>(),
    ))
}
