use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto},
    },
    server::{
        error::AppError,
        model::{auth::AuthUser, category::Category},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get all categories.
///
/// Categories are shared by every user and ordered by name.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `200 OK` - All categories
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    Ok(Json(
        categories
            .into_iter()
            .map(Category::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Create a category.
///
/// # Access Control
/// - Authenticated user
///
/// # Arguments
/// - `name` - Category name, 1 to 50 characters after trimming and unique
///
/// # Returns
/// - `201 Created` - The new category
/// - `400 Bad Request` - Empty, overlong or duplicate name
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid category name", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    _user: AuthUser,
    WithRejection(Json(payload), _): WithRejection<Json<CreateCategoryDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).create(&payload.name).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}
