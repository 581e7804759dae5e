//! Slovnyk Core - domain models and hierarchy rules
//!
//! This crate provides the foundational data structures and operations for
//! the dictionary registry, including:
//! - Dictionary and Item models
//! - Draft validation for raw caller input
//! - Hierarchy rules (cycle detection over the snapshot)
//! - Snapshot read model of all dictionaries
//! - Error taxonomy with stable reason codes

pub mod draft;
pub mod errors;
pub mod logging;
pub mod model;
pub mod rules;
pub mod snapshot;

// Re-export commonly used types
pub use draft::{DictionaryDraft, ItemDraft};
pub use errors::{DictError, Result};
pub use model::{Dictionary, Item, NewDictionary, NewItem};
pub use snapshot::Snapshot;
