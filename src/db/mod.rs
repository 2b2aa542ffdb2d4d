pub mod exercises;
pub mod schema;

use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use schema::run_migrations;

/// Shared corpus database handle, injected into the HTTP layer at startup.
/// Tests open their own pool over an isolated fixture database.
pub type DbPool = Arc<Mutex<Connection>>;

/// Error returned when database lock cannot be acquired
#[derive(Debug)]
pub struct DbLockError;

impl std::fmt::Display for DbLockError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Database unavailable")
  }
}

impl std::error::Error for DbLockError {}

/// Try to acquire the database lock, returning an error if poisoned
pub fn try_lock(pool: &DbPool) -> std::result::Result<MutexGuard<'_, Connection>, DbLockError> {
  pool.lock().map_err(|_: PoisonError<_>| {
    tracing::error!("database mutex poisoned - a thread panicked while holding the lock");
    DbLockError
  })
}

pub fn init_db(path: &Path) -> Result<DbPool> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).ok();
  }

  let conn = Connection::open(path)?;
  run_migrations(&conn)?;
  Ok(Arc::new(Mutex::new(conn)))
}
