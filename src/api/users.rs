//! User endpoints

use axum::{extract::State, http::StatusCode, response::Response, Json};

use crate::{error::AppResult, models::user::User, AppState};

use super::list_response;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "User list", body = Vec<User>),
        (status = 204, description = "No users")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Response> {
    let users = state.services.users.list().await?;
    Ok(list_response(users))
}

/// Add a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = User,
    responses(
        (status = 201, description = "User added"),
        (status = 400, description = "Invalid user", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> AppResult<StatusCode> {
    state.services.users.add(user).await?;
    Ok(StatusCode::CREATED)
}
