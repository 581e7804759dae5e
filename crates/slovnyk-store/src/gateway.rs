//! Storage gateway
//!
//! Durable CRUD for dictionaries and items plus one-time bootstrap. Every
//! operation opens its own connection and closes it on return, so no lock
//! outlives a single call; atomicity across calls is not provided.

use crate::db;
use crate::errors::Result;
use crate::migrations;
use crate::repo::DictRepo;
use crate::seed;
use rusqlite::Connection;
use slovnyk_core::model::{Dictionary, Item, NewDictionary, NewItem};
use std::path::{Path, PathBuf};

/// SQLite-backed storage gateway
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    path: PathBuf,
}

impl SqliteGateway {
    /// Create a gateway over the database at `path`
    ///
    /// No connection is opened until an operation runs.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = db::open(&self.path)?;
        db::configure(&conn)?;
        Ok(conn)
    }

    /// Create the schema and seed sample data on first run
    ///
    /// Idempotent: migrations and the seed are each recorded in the
    /// schema_version ledger and skipped on subsequent runs.
    pub fn initialize(&self) -> Result<()> {
        let mut conn = self.connect()?;
        migrations::apply_migrations(&mut conn)?;
        seed::seed_sample_data(&mut conn)?;
        Ok(())
    }

    /// All dictionaries ordered by ascending id
    pub fn list_dictionaries(&self) -> Result<Vec<Dictionary>> {
        let conn = self.connect()?;
        DictRepo::list_dicts(&conn)
    }

    /// Insert a dictionary, returning the storage-assigned id
    pub fn create_dictionary(&self, d: &NewDictionary) -> Result<i64> {
        let conn = self.connect()?;
        DictRepo::insert_dict(&conn, d)
    }

    /// Overwrite a dictionary's mutable fields; no-op for a missing id
    pub fn update_dictionary(&self, id: i64, d: &NewDictionary) -> Result<()> {
        let conn = self.connect()?;
        DictRepo::update_dict(&conn, id, d)
    }

    /// Delete a dictionary; its items cascade via the FK rule
    pub fn delete_dictionary(&self, id: i64) -> Result<()> {
        let conn = self.connect()?;
        DictRepo::delete_dict(&conn, id)
    }

    /// Items of one dictionary ordered by ascending id
    pub fn list_items(&self, dict_id: i64) -> Result<Vec<Item>> {
        let conn = self.connect()?;
        DictRepo::list_items(&conn, dict_id)
    }

    /// Insert an item, returning the storage-assigned id
    pub fn create_item(&self, it: &NewItem) -> Result<i64> {
        let conn = self.connect()?;
        DictRepo::insert_item(&conn, it)
    }

    /// Overwrite an item's mutable fields; no-op for a missing id
    pub fn update_item(&self, id: i64, it: &NewItem) -> Result<()> {
        let conn = self.connect()?;
        DictRepo::update_item(&conn, id, it)
    }

    /// Delete an item
    pub fn delete_item(&self, id: i64) -> Result<()> {
        let conn = self.connect()?;
        DictRepo::delete_item(&conn, id)
    }
}
