//! Hierarchy rules for the dictionary forest

pub mod hierarchy;

pub use hierarchy::{would_create_cycle, CREATE_SENTINEL};
