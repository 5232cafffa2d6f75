//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::QueryParams;
use crate::api::AppState;
use crate::domain::{NewUser, User};
use crate::errors::AppResult;

/// Query parameters accepted by `POST /users`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateUserParams {
    /// Username to store (any string, duplicates allowed)
    pub username: String,
    /// Email to store (any string, not validated)
    pub email: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(create_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user, in store order", body = Vec<User>),
        (status = 500, description = "Database unavailable")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Create a user from query parameters
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    params(CreateUserParams),
    responses(
        (status = 200, description = "The persisted user with its generated id", body = User),
        (status = 422, description = "Missing or malformed query parameters"),
        (status = 500, description = "Database write failed")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<CreateUserParams>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .create_user(NewUser::new(params.username, params.email))
        .await?;

    Ok(Json(user))
}
