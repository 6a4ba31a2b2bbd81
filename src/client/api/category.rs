use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::category::{CategoryDto, CreateCategoryDto},
};

pub async fn get_categories() -> Result<Vec<CategoryDto>, ApiError> {
    let response = send_request(get("/api/categories")).await?;
    parse_response(response).await
}

pub async fn create_category(name: String) -> Result<CategoryDto, ApiError> {
    let body = serialize_json(&CreateCategoryDto { name })?;
    let response = send_request(post("/api/categories").body(body)).await?;
    parse_response(response).await
}
