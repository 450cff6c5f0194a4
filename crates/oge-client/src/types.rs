//! Request and response types for the OGE items API.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

/// One row of the items listing.
///
/// Unknown fields are rejected so a response carrying extra columns fails to
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Item identifier.
    pub id: i64,
    /// Item name.
    pub name: String,
    /// Creation timestamp, verbatim from the server.
    pub created_at: String,
}

/// Query parameters for listing items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsQuery {
    /// Maximum number of items; the server defaults to 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}
