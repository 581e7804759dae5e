//! Migration runner
//!
//! Applies embedded migrations idempotently, recording each in the
//! schema_version ledger with its checksum

use crate::errors::{from_rusqlite, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;
use rusqlite::{Connection, Transaction};
use slovnyk_core::errors::DictError;

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in get_migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// Check whether a migration id is already recorded in the ledger
pub(crate) fn migration_applied(conn: &Connection, migration_id: &str) -> bool {
    conn.query_row(
        "SELECT 1 FROM schema_version WHERE migration_id = ?",
        [migration_id],
        |_| Ok(true),
    )
    .unwrap_or(false)
}

/// Record an applied migration (or data marker) in the ledger
pub(crate) fn record_migration(
    tx: &Transaction<'_>,
    migration_id: &str,
    checksum: Option<&str>,
) -> Result<()> {
    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration_id, now, checksum],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    if migration_applied(conn, migration_id) {
        return Ok(());
    }

    let checksum = compute_checksum(sql);

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(sql).map_err(|e| DictError::Storage {
        message: format!("Migration {} failed: {}", migration_id, e),
    })?;

    record_migration(&tx, migration_id, Some(&checksum))?;

    tx.commit().map_err(from_rusqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_migrations() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        // Both tables exist and are empty
        let dicts: i64 = conn
            .query_row("SELECT COUNT(*) FROM DICT", [], |row| row.get(0))
            .unwrap();
        let items: i64 = conn
            .query_row("SELECT COUNT(*) FROM DICT_ITEM", [], |row| row.get(0))
            .unwrap();
        assert_eq!(dicts, 0);
        assert_eq!(items, 0);
    }

    #[test]
    fn test_idempotency() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        apply_migrations(&mut conn).unwrap();

        let recorded: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(recorded, 1);
    }
}
