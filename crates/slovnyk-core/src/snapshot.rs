//! Snapshot - point-in-time read model of all dictionaries
//!
//! The snapshot is a value copy, replaced wholesale after every successful
//! mutation and on initial load. It is never mutated in place, so a stale
//! view can only exist between a write and the reload that follows it.

use crate::model::Dictionary;

/// Ordered, point-in-time copy of all dictionaries (ascending id)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    dicts: Vec<Dictionary>,
}

impl Snapshot {
    /// Build a snapshot from dictionaries already ordered by ascending id
    pub fn new(dicts: Vec<Dictionary>) -> Self {
        Self { dicts }
    }

    /// Look up a dictionary by id
    pub fn get(&self, id: i64) -> Option<&Dictionary> {
        self.dicts.iter().find(|d| d.id == id)
    }

    /// Check whether a dictionary id exists
    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Parent id of a dictionary, if it exists and has one
    pub fn parent_of(&self, id: i64) -> Option<i64> {
        self.get(id).and_then(|d| d.parent_id)
    }

    /// Ids of dictionaries whose parent is `id`, in ascending order
    pub fn children_of(&self, id: i64) -> Vec<i64> {
        self.dicts
            .iter()
            .filter(|d| d.parent_id == Some(id))
            .map(|d| d.id)
            .collect()
    }

    /// Iterate dictionaries in ascending-id order
    pub fn iter(&self) -> impl Iterator<Item = &Dictionary> {
        self.dicts.iter()
    }

    /// Number of dictionaries in the snapshot
    pub fn len(&self) -> usize {
        self.dicts.len()
    }

    /// Check if the snapshot holds no dictionaries
    pub fn is_empty(&self) -> bool {
        self.dicts.is_empty()
    }
}
