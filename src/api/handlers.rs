//! API request handlers.

use crate::db::JsonRow;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{HealthResponse, ItemResponse, ItemsQuery};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Uri;
use std::sync::Arc;
use tracing::debug;


// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
///
/// Never touches the database, so it reports process liveness only.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// ============================================================================
// Items
// ============================================================================

/// List items.
#[utoipa::path(
    get,
    path = "/items",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum number of items to return (default 10)")
    ),
    responses(
        (status = 200, description = "Items in database order", body = [ItemResponse]),
        (status = 422, description = "limit is not an integer", body = ErrorResponse),
        (status = 500, description = "Pool not initialized or database failure", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ItemsQuery>, QueryRejection>,
) -> Result<Json<Vec<JsonRow>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;
    let db = state.db().ok_or(ApiError::PoolNotInitialized)?;

    let limit = query.limit();
    let items = db.fetch_items(limit).await?;
    debug!(limit, returned = items.len(), "Listed items");

    Ok(Json(items))
}

// ============================================================================
// Fallback
// ============================================================================

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
