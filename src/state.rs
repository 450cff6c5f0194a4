//! Application state management.

use crate::db::DatabasePool;
use parking_lot::RwLock;
use tracing::info;

/// Application state shared across all handlers.
///
/// Holds the process-wide database pool. The handle is set once at startup
/// and cleared once by [`AppState::shutdown`].
pub struct AppState {
    db: RwLock<Option<DatabasePool>>,
}

impl AppState {
    /// Creates a new application state without database.
    #[must_use]
    pub fn new() -> Self {
        Self {
            db: RwLock::new(None),
        }
    }

    /// Creates a new application state with database.
    #[must_use]
    pub fn with_database(db: DatabasePool) -> Self {
        Self {
            db: RwLock::new(Some(db)),
        }
    }

    /// Returns a handle to the database pool, if one is installed.
    #[must_use]
    pub fn db(&self) -> Option<DatabasePool> {
        self.db.read().clone()
    }

    /// Clears the pool handle and closes every connection it owns.
    ///
    /// Waits for connections still checked out by in-flight requests to be
    /// returned. Does nothing if no pool is installed, so calling it more than
    /// once is harmless.
    pub async fn shutdown(&self) {
        let db = self.db.write().take();
        match db {
            Some(db) => {
                info!("Closing database connection pool");
                db.close().await;
            }
            None => info!("No database pool to close"),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
