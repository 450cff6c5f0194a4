//! Request and response DTOs with OpenAPI schemas.

use crate::db::DEFAULT_ITEMS_LIMIT;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status, always `"ok"`.
    pub status: String,
}

impl HealthResponse {
    /// The fixed liveness payload.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Query parameters for the items listing.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ItemsQuery {
    /// Maximum number of rows to return (default 10).
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ItemsQuery {
    /// Returns the requested limit, or the default when none was given.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_ITEMS_LIMIT)
    }
}

/// Shape of one row returned by `GET /items`.
///
/// Documentation only: rows are serialized straight from the database
/// columns, so `id` follows the column's integer width and `created_at` the
/// column's timestamp flavour.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    /// Item identifier.
    pub id: i64,
    /// Item name.
    pub name: String,
    /// Creation timestamp as produced by the database driver.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_body() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_items_query_default_limit() {
        let query = ItemsQuery::default();
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn test_items_query_explicit_limit() {
        let query = ItemsQuery { limit: Some(3) };
        assert_eq!(query.limit(), 3);
    }
}
