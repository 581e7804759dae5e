//! Slovnyk Engine - orchestration layer
//!
//! Coordinates validation against the in-memory snapshot with persistence
//! through the storage gateway.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for registry operations
//! (`info!` on success). Lower layers use only `tracing::debug!()` for
//! internal details.

pub mod registry;

pub use registry::Registry;
