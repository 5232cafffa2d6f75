//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};

use super::handlers::user_routes;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{OPENAPI_PATH, ROOT_MESSAGE};
use crate::errors::AppError;
use crate::types::MessageResponse;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(OPENAPI_PATH, get(openapi_json))
        .nest("/users", user_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    responses(
        (status = 200, description = "Fixed status message", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub services: ServiceHealth,
}

/// Individual service health status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceHealth {
    pub database: ServiceStatus,
}

/// Service status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint with database connectivity check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Status",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_status = match state.database.ping().await {
        Ok(_) => ServiceStatus {
            status: "healthy".to_string(),
            error: None,
        },
        Err(e) => ServiceStatus {
            status: "unhealthy".to_string(),
            error: Some(e.to_string()),
        },
    };

    let healthy = db_status.error.is_none();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        services: ServiceHealth {
            database: db_status,
        },
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

/// Generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Fallback for unmatched routes
async fn not_found() -> AppError {
    AppError::NotFound
}
