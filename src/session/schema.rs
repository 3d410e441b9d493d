// src/session/schema.rs — Schema migrations

use rusqlite::{params, Connection};
use tracing::info;

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

// Append-only; never edit a shipped migration.
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: include_str!("migrations/001_initial_schema.up.sql"),
}];

/// Apply every migration newer than the recorded schema version. Safe to
/// call on every open; each migration runs in its own transaction.
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    let applied: u32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM _migrations",
        [],
        |r| r.get(0),
    )?;

    for m in MIGRATIONS.iter().skip_while(|m| m.version <= applied) {
        info!("Applying migration {}: {}", m.version, m.name);

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)?;
        tx.execute(
            "INSERT INTO _migrations (version, name) VALUES (?1, ?2)",
            params![m.version, m.name],
        )?;
        tx.commit()?;
    }

    Ok(())
}
