//! Helpers for tests that talk to a live PostgreSQL server.
//!
//! Those tests run only when `TEST_DATABASE_URL` is set and return early
//! otherwise.

use crate::config::DatabaseConfig;
use crate::db::DatabasePool;

/// Environment variable naming the database used by live tests.
pub(crate) const TEST_DATABASE_URL_ENV: &str = "TEST_DATABASE_URL";

/// Rows seeded into the temporary `items` table.
pub(crate) const SEEDED_ITEMS: i64 = 12;

/// Opens a pool with exactly one connection and shadows `items` with a
/// session-local temporary table holding [`SEEDED_ITEMS`] rows.
///
/// The temporary table lives on the pool's only connection, so nothing in
/// the target database is modified. Returns `None` when
/// [`TEST_DATABASE_URL_ENV`] is unset.
pub(crate) async fn single_connection_items_pool() -> Option<DatabasePool> {
    let url = std::env::var(TEST_DATABASE_URL_ENV)
        .ok()
        .filter(|url| !url.is_empty())?;
    let config = DatabaseConfig {
        url,
        min_connections: 1,
        max_connections: 1,
        acquire_timeout_secs: 5,
    };
    let db = DatabasePool::connect(&config)
        .await
        .expect("test database reachable");

    sqlx::query(
        r#"
        CREATE TEMP TABLE items (
            id INT4 PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(db.pool())
    .await
    .expect("create temporary items table");

    sqlx::query(
        r#"
        INSERT INTO items (id, name, created_at)
        SELECT n, 'item-' || n, TIMESTAMPTZ '2024-03-29 16:00:00+00' + n * INTERVAL '1 minute'
        FROM generate_series(1, $1::INT4) AS n
        "#,
    )
    .bind(SEEDED_ITEMS as i32)
    .execute(db.pool())
    .await
    .expect("seed temporary items table");

    Some(db)
}
