use thiserror::Error;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

/// Error taxonomy for registry operations
///
/// Each variant maps to a stable reason code via [`DictError::code`], so a
/// presentation layer can pick an appropriate message without matching on
/// variant internals.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DictError {
    // ===== Validation Errors =====
    /// A required text field was empty or whitespace-only
    #[error("Required field '{field}' cannot be empty")]
    RequiredFieldEmpty { field: &'static str },

    /// Parent reference text did not parse as an integer
    #[error("Parent reference must be numeric, got '{input}'")]
    ParentNotNumeric { input: String },

    /// Parent id does not exist among current dictionaries
    #[error("Parent dictionary not found: {parent_id}")]
    ParentNotFound { parent_id: i64 },

    /// Assigning the parent would make the dictionary its own ancestor
    #[error(
        "Setting parent {parent_id} would create a cycle involving dictionary {dict_id}"
    )]
    CycleDetected { dict_id: i64, parent_id: i64 },

    // ===== Structural Errors =====
    /// Dictionary not found in the snapshot
    #[error("Dictionary not found: {dict_id}")]
    DictionaryNotFound { dict_id: i64 },

    /// Cannot delete a dictionary that child dictionaries still point at
    #[error("Cannot delete dictionary {dict_id}: has {child_count} child dictionaries")]
    HasChildDictionaries { dict_id: i64, child_count: usize },

    // ===== Integration Errors =====
    /// Storage-engine failure, propagated unmodified
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DictError {
    /// Get the stable reason code for this error
    pub fn code(&self) -> &'static str {
        match self {
            DictError::RequiredFieldEmpty { .. } => "empty-required-field",
            DictError::ParentNotNumeric { .. } => "parent-not-numeric",
            DictError::ParentNotFound { .. } => "parent-not-found",
            DictError::CycleDetected { .. } => "would-create-cycle",
            DictError::DictionaryNotFound { .. } => "dictionary-not-found",
            DictError::HasChildDictionaries { .. } => "has-child-dictionaries",
            DictError::Storage { .. } => "storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes() {
        let cases = [
            (
                DictError::RequiredFieldEmpty { field: "name" },
                "empty-required-field",
            ),
            (
                DictError::ParentNotNumeric {
                    input: "abc".to_string(),
                },
                "parent-not-numeric",
            ),
            (
                DictError::ParentNotFound { parent_id: 42 },
                "parent-not-found",
            ),
            (
                DictError::CycleDetected {
                    dict_id: 1,
                    parent_id: 3,
                },
                "would-create-cycle",
            ),
            (
                DictError::DictionaryNotFound { dict_id: 9 },
                "dictionary-not-found",
            ),
            (
                DictError::HasChildDictionaries {
                    dict_id: 1,
                    child_count: 2,
                },
                "has-child-dictionaries",
            ),
            (
                DictError::Storage {
                    message: "disk full".to_string(),
                },
                "storage",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = DictError::CycleDetected {
            dict_id: 1,
            parent_id: 3,
        };
        let text = err.to_string();
        assert!(text.contains('1'));
        assert!(text.contains('3'));
    }
}
