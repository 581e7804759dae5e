//! Sample data seeding
//!
//! Inserts the fixed starter dictionaries and items exactly once, inside a
//! single transaction. The seed run is recorded in the schema_version
//! ledger like a migration, so re-running initialization never duplicates
//! it.

use crate::errors::{from_rusqlite, Result};
use crate::migrations::{migration_applied, record_migration};
use rusqlite::{params, Connection, Transaction};

/// Ledger id under which the seed run is recorded
const SEED_ID: &str = "seed_sample_data_v1";

/// Insert the sample dictionaries and items if not already present
///
/// Returns true when the seed was applied by this call.
pub fn seed_sample_data(conn: &mut Connection) -> Result<bool> {
    if migration_applied(conn, SEED_ID) {
        return Ok(false);
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    let countries = insert_dict(&tx, None, "Країни", "COUNTRIES", Some("Список країн."))?;
    let languages = insert_dict(&tx, Some(countries), "Мови", "LANGUAGES", Some("Список мов."))?;

    insert_item(&tx, countries, "UA", "Україна")?;
    insert_item(&tx, countries, "PL", "Польща")?;

    insert_item(&tx, languages, "UA", "Українська")?;
    insert_item(&tx, languages, "EN", "Англійська")?;
    insert_item(&tx, languages, "JP", "Японська")?;

    record_migration(&tx, SEED_ID, None)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(dict_count = 2, item_count = 5, "Seeded sample data");

    Ok(true)
}

fn insert_dict(
    tx: &Transaction<'_>,
    parent_id: Option<i64>,
    name: &str,
    code: &str,
    description: Option<&str>,
) -> Result<i64> {
    tx.execute(
        "INSERT INTO DICT (PARENT_ID, NAME, CODE, DESCRIPTION) VALUES (?1, ?2, ?3, ?4)",
        params![parent_id, name, code, description],
    )
    .map_err(from_rusqlite)?;

    Ok(tx.last_insert_rowid())
}

fn insert_item(tx: &Transaction<'_>, dict_id: i64, code: &str, name: &str) -> Result<()> {
    tx.execute(
        "INSERT INTO DICT_ITEM (DICT_ID, CODE, NAME) VALUES (?1, ?2, ?3)",
        params![dict_id, code, name],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::apply_migrations;

    #[test]
    fn test_seed_once() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        assert!(seed_sample_data(&mut conn).unwrap());

        let dicts: i64 = conn
            .query_row("SELECT COUNT(*) FROM DICT", [], |row| row.get(0))
            .unwrap();
        let items: i64 = conn
            .query_row("SELECT COUNT(*) FROM DICT_ITEM", [], |row| row.get(0))
            .unwrap();
        assert_eq!(dicts, 2);
        assert_eq!(items, 5);
    }

    #[test]
    fn test_seed_does_not_reapply() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        assert!(seed_sample_data(&mut conn).unwrap());
        assert!(!seed_sample_data(&mut conn).unwrap());

        let dicts: i64 = conn
            .query_row("SELECT COUNT(*) FROM DICT", [], |row| row.get(0))
            .unwrap();
        assert_eq!(dicts, 2);
    }

    #[test]
    fn test_seed_links_languages_under_countries() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        seed_sample_data(&mut conn).unwrap();

        let parent: Option<i64> = conn
            .query_row(
                "SELECT PARENT_ID FROM DICT WHERE CODE = 'LANGUAGES'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let root: i64 = conn
            .query_row(
                "SELECT DICT_ID FROM DICT WHERE CODE = 'COUNTRIES'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(parent, Some(root));
    }
}
