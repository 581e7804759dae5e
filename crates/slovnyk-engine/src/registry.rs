//! Registry - hierarchy guard and orchestrator
//!
//! Holds a point-in-time snapshot of all dictionaries, validates caller
//! drafts against it, delegates writes to the storage gateway, and reloads
//! the snapshot after every successful mutation.

use slovnyk_core::draft::{DictionaryDraft, ItemDraft};
use slovnyk_core::errors::{DictError, Result};
use slovnyk_core::model::{Dictionary, Item, NewDictionary};
use slovnyk_core::rules::{would_create_cycle, CREATE_SENTINEL};
use slovnyk_core::snapshot::Snapshot;
use slovnyk_store::SqliteGateway;
use std::path::Path;

/// Dictionary registry over a SQLite gateway
pub struct Registry {
    gateway: SqliteGateway,
    snapshot: Snapshot,
}

impl Registry {
    /// Open the registry at `path`, bootstrapping the store if needed
    ///
    /// # Errors
    /// * `Storage` - the database could not be created or read
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let gateway = SqliteGateway::new(path);
        gateway.initialize()?;

        let mut registry = Self {
            gateway,
            snapshot: Snapshot::default(),
        };
        registry.reload()?;

        Ok(registry)
    }

    /// Replace the snapshot with the current stored state
    pub fn reload(&mut self) -> Result<()> {
        let dicts = self.gateway.list_dictionaries()?;
        tracing::debug!(dict_count = dicts.len(), "Reloaded snapshot");
        self.snapshot = Snapshot::new(dicts);
        Ok(())
    }

    /// Current snapshot of all dictionaries
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Dictionaries in ascending-id order
    pub fn dictionaries(&self) -> impl Iterator<Item = &Dictionary> {
        self.snapshot.iter()
    }

    /// Validate and create a dictionary, returning the new id
    ///
    /// # Errors
    /// * `RequiredFieldEmpty` - name or code empty after trimming
    /// * `ParentNotNumeric` - parent text is not an integer
    /// * `ParentNotFound` - parent id not among current dictionaries
    pub fn create_dictionary(&mut self, draft: &DictionaryDraft) -> Result<i64> {
        // The sentinel subject cannot match a stored id, so the cycle walk
        // never rejects a creation
        let payload = self.validate_dictionary(draft, CREATE_SENTINEL)?;

        let id = self.gateway.create_dictionary(&payload)?;
        tracing::info!(dict_id = id, name = %payload.name, "Created dictionary");

        self.reload()?;
        Ok(id)
    }

    /// Validate and overwrite a dictionary's mutable fields
    ///
    /// # Errors
    /// * `DictionaryNotFound` - `id` is not in the snapshot
    /// * `RequiredFieldEmpty` / `ParentNotNumeric` / `ParentNotFound`
    /// * `CycleDetected` - the new parent is the dictionary itself or one
    ///   of its descendants
    pub fn update_dictionary(&mut self, id: i64, draft: &DictionaryDraft) -> Result<()> {
        if !self.snapshot.contains(id) {
            return Err(DictError::DictionaryNotFound { dict_id: id });
        }

        let payload = self.validate_dictionary(draft, id)?;

        self.gateway.update_dictionary(id, &payload)?;
        tracing::info!(dict_id = id, "Updated dictionary");

        self.reload()
    }

    /// Delete a dictionary; its items cascade at the storage level
    ///
    /// # Errors
    /// * `DictionaryNotFound` - `id` is not in the snapshot
    /// * `HasChildDictionaries` - other dictionaries still point at `id`
    pub fn delete_dictionary(&mut self, id: i64) -> Result<()> {
        if !self.snapshot.contains(id) {
            return Err(DictError::DictionaryNotFound { dict_id: id });
        }

        let children = self.snapshot.children_of(id);
        if !children.is_empty() {
            return Err(DictError::HasChildDictionaries {
                dict_id: id,
                child_count: children.len(),
            });
        }

        self.gateway.delete_dictionary(id)?;
        tracing::info!(dict_id = id, "Deleted dictionary");

        self.reload()
    }

    /// Items of one dictionary in ascending-id order
    ///
    /// # Errors
    /// * `DictionaryNotFound` - `dict_id` is not in the snapshot
    pub fn items(&self, dict_id: i64) -> Result<Vec<Item>> {
        if !self.snapshot.contains(dict_id) {
            return Err(DictError::DictionaryNotFound { dict_id });
        }
        self.gateway.list_items(dict_id)
    }

    /// Validate and create an item under `dict_id`
    ///
    /// # Errors
    /// * `DictionaryNotFound` - `dict_id` is not in the snapshot
    /// * `RequiredFieldEmpty` - code or name empty after trimming
    pub fn create_item(&mut self, dict_id: i64, draft: &ItemDraft) -> Result<i64> {
        if !self.snapshot.contains(dict_id) {
            return Err(DictError::DictionaryNotFound { dict_id });
        }

        let payload = draft.validate(dict_id)?;

        let id = self.gateway.create_item(&payload)?;
        tracing::info!(item_id = id, dict_id, "Created item");

        self.reload()?;
        Ok(id)
    }

    /// Validate and overwrite an item's mutable fields
    ///
    /// The owning dictionary is rewritten too; a missing item id is a
    /// silent no-op, matching the gateway contract.
    ///
    /// # Errors
    /// * `DictionaryNotFound` - `dict_id` is not in the snapshot
    /// * `RequiredFieldEmpty` - code or name empty after trimming
    pub fn update_item(&mut self, item_id: i64, dict_id: i64, draft: &ItemDraft) -> Result<()> {
        if !self.snapshot.contains(dict_id) {
            return Err(DictError::DictionaryNotFound { dict_id });
        }

        let payload = draft.validate(dict_id)?;

        self.gateway.update_item(item_id, &payload)?;
        tracing::info!(item_id, dict_id, "Updated item");

        self.reload()
    }

    /// Delete an item; a missing id is a silent no-op
    pub fn delete_item(&mut self, item_id: i64) -> Result<()> {
        self.gateway.delete_item(item_id)?;
        tracing::info!(item_id, "Deleted item");

        self.reload()
    }

    /// Shared validation pipeline: field rules, then parent existence,
    /// then the cycle walk
    fn validate_dictionary(
        &self,
        draft: &DictionaryDraft,
        subject_id: i64,
    ) -> Result<NewDictionary> {
        let payload = draft.validate()?;

        if let Some(parent_id) = payload.parent_id {
            if !self.snapshot.contains(parent_id) {
                return Err(DictError::ParentNotFound { parent_id });
            }
            if would_create_cycle(&self.snapshot, subject_id, parent_id) {
                return Err(DictError::CycleDetected {
                    dict_id: subject_id,
                    parent_id,
                });
            }
        }

        Ok(payload)
    }
}
