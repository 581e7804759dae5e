//! Migration framework
//!
//! Provides:
//! - Embedded SQL migrations
//! - Idempotent application recorded in schema_version
//! - SHA256 checksums of applied SQL

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
pub(crate) use runner::{migration_applied, record_migration};
