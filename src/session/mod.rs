// src/session/mod.rs — Session persistence

pub mod schema;
pub mod store;

use rusqlite::Connection;
use std::path::Path;

pub use store::{NewSession, Session, SessionPatch, SessionStore, SessionSummary};

/// Open (or create) the session database at the given path.
pub fn open(path: &Path) -> anyhow::Result<SessionStore> {
    let conn = Connection::open(path)?;
    // WAL for better concurrent read behavior
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    schema::run_migrations(&conn)?;

    Ok(SessionStore::new(conn))
}

/// Create an in-memory database (for testing).
pub fn in_memory() -> anyhow::Result<SessionStore> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    schema::run_migrations(&conn)?;
    Ok(SessionStore::new(conn))
}
