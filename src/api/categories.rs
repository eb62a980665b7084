//! Category endpoints

use axum::{extract::State, http::StatusCode, response::Response, Json};

use crate::{
    error::AppResult,
    models::category::{Category, CreateCategory},
    AppState,
};

use super::list_response;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Category list", body = Vec<Category>),
        (status = 204, description = "No categories")
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Response> {
    let categories = state.services.categories.list().await?;
    Ok(list_response(categories))
}

/// Add a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category added"),
        (status = 400, description = "Invalid category", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(data): Json<CreateCategory>,
) -> AppResult<StatusCode> {
    state.services.categories.add(data).await?;
    Ok(StatusCode::CREATED)
}
