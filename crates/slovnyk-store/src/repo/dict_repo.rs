//! SQLite repository
//!
//! Parameterized CRUD statements for the DICT and DICT_ITEM tables

use crate::errors::{from_rusqlite, Result};
use rusqlite::{params, Connection};
use slovnyk_core::model::{Dictionary, Item, NewDictionary, NewItem};

/// SQLite repository for dictionaries and items
pub struct DictRepo;

impl DictRepo {
    /// List all dictionaries ordered by ascending id
    pub fn list_dicts(conn: &Connection) -> Result<Vec<Dictionary>> {
        let mut stmt = conn
            .prepare(
                "SELECT DICT_ID, PARENT_ID, NAME, CODE, DESCRIPTION FROM DICT ORDER BY DICT_ID ASC",
            )
            .map_err(from_rusqlite)?;

        let dicts = stmt
            .query_map([], |row| {
                Ok(Dictionary {
                    id: row.get(0)?,
                    parent_id: row.get(1)?,
                    name: row.get(2)?,
                    code: row.get(3)?,
                    description: row.get(4)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(dicts)
    }

    /// Insert a dictionary row, returning the storage-assigned id
    pub fn insert_dict(conn: &Connection, d: &NewDictionary) -> Result<i64> {
        conn.execute(
            "INSERT INTO DICT (PARENT_ID, NAME, CODE, DESCRIPTION) VALUES (?1, ?2, ?3, ?4)",
            params![d.parent_id, d.name, d.code, d.description],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Overwrite all mutable fields of a dictionary by id
    ///
    /// Silently does nothing when the id does not exist.
    pub fn update_dict(conn: &Connection, id: i64, d: &NewDictionary) -> Result<()> {
        conn.execute(
            "UPDATE DICT SET PARENT_ID = ?1, NAME = ?2, CODE = ?3, DESCRIPTION = ?4
             WHERE DICT_ID = ?5",
            params![d.parent_id, d.name, d.code, d.description, id],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Delete a dictionary row; dependent items go with it via the FK rule
    pub fn delete_dict(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM DICT WHERE DICT_ID = ?1", params![id])
            .map_err(from_rusqlite)?;

        Ok(())
    }

    /// List the items of one dictionary ordered by ascending id
    pub fn list_items(conn: &Connection, dict_id: i64) -> Result<Vec<Item>> {
        let mut stmt = conn
            .prepare(
                "SELECT ITEM_ID, DICT_ID, CODE, NAME FROM DICT_ITEM
                 WHERE DICT_ID = ?1 ORDER BY ITEM_ID ASC",
            )
            .map_err(from_rusqlite)?;

        let items = stmt
            .query_map([dict_id], |row| {
                Ok(Item {
                    id: row.get(0)?,
                    dict_id: row.get(1)?,
                    code: row.get(2)?,
                    name: row.get(3)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(items)
    }

    /// Insert an item row, returning the storage-assigned id
    pub fn insert_item(conn: &Connection, it: &NewItem) -> Result<i64> {
        conn.execute(
            "INSERT INTO DICT_ITEM (DICT_ID, CODE, NAME) VALUES (?1, ?2, ?3)",
            params![it.dict_id, it.code, it.name],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Overwrite all mutable fields of an item by id
    ///
    /// Silently does nothing when the id does not exist.
    pub fn update_item(conn: &Connection, id: i64, it: &NewItem) -> Result<()> {
        conn.execute(
            "UPDATE DICT_ITEM SET DICT_ID = ?1, CODE = ?2, NAME = ?3 WHERE ITEM_ID = ?4",
            params![it.dict_id, it.code, it.name, id],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Delete an item row
    pub fn delete_item(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM DICT_ITEM WHERE ITEM_ID = ?1", params![id])
            .map_err(from_rusqlite)?;

        Ok(())
    }
}
