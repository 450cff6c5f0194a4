//! Queries against the `items` table.

use super::pool::DatabasePool;
use super::row::{JsonRow, row_to_json};


/// Number of items returned when the caller gives no `limit`.
pub const DEFAULT_ITEMS_LIMIT: i64 = 10;

/// The single read statement served by `/items`; `$1` is the row limit.
const SELECT_ITEMS: &str = "SELECT id, name, created_at FROM items LIMIT $1";

impl DatabasePool {
    /// Fetches up to `limit` items, in whatever order the database yields them.
    ///
    /// One connection is held for the duration of the call and is handed back
    /// to the pool when it goes out of scope, on success and on error alike.
    ///
    /// # Errors
    /// Returns an error if no connection can be acquired, the query fails, or
    /// a column has a type that cannot be mapped to JSON.
    pub async fn fetch_items(&self, limit: i64) -> Result<Vec<JsonRow>, sqlx::Error> {
        let mut conn = self.pool().acquire().await?;

        let rows = sqlx::query(SELECT_ITEMS)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await?;

        rows.iter().map(row_to_json).collect()
    }
}
