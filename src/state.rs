//! Application state shared across handlers.

use crate::db::DbPool;

/// Application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Corpus database handle, injected at startup so tests can swap in an
    /// isolated fixture database
    pub db: DbPool,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}
