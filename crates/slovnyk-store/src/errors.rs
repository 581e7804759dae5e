//! Error handling for slovnyk-store
//!
//! Storage failures cross into the core taxonomy here; rusqlite never leaks
//! past the gateway boundary.

use slovnyk_core::errors::DictError;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

/// Create a storage error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> DictError {
    DictError::Storage {
        message: err.to_string(),
    }
}
