//! Draft validation for raw caller input
//!
//! Callers hand over text fields as entered (the form's text boxes).
//! Validation trims, enforces required fields, and parses the parent
//! reference. Snapshot-level checks (parent existence, cycles) belong to
//! the registry.

use crate::errors::{DictError, Result};
use crate::model::{NewDictionary, NewItem};

/// Raw dictionary input as entered by the caller
#[derive(Debug, Clone, Default)]
pub struct DictionaryDraft {
    pub name: String,
    pub code: String,
    pub description: String,
    /// Parent dictionary id as text; empty means root
    pub parent: String,
}

impl DictionaryDraft {
    /// Validate field-level rules and produce a write payload
    ///
    /// Rules, in order:
    /// 1. `name` and `code` must be non-empty after trimming
    /// 2. `parent`, if non-empty, must parse as an integer
    ///
    /// An empty-after-trim description becomes `None`.
    ///
    /// # Errors
    /// * `RequiredFieldEmpty` - name or code is empty or whitespace-only
    /// * `ParentNotNumeric` - parent text is not an integer
    pub fn validate(&self) -> Result<NewDictionary> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DictError::RequiredFieldEmpty { field: "name" });
        }

        let code = self.code.trim();
        if code.is_empty() {
            return Err(DictError::RequiredFieldEmpty { field: "code" });
        }

        let parent_id = parse_parent_ref(&self.parent)?;

        let description = self.description.trim();
        let description = if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        };

        Ok(NewDictionary {
            parent_id,
            name: name.to_string(),
            code: code.to_string(),
            description,
        })
    }
}

/// Parse a parent reference; empty text means no parent
///
/// # Errors
/// * `ParentNotNumeric` - non-empty text that is not an integer
pub fn parse_parent_ref(input: &str) -> Result<Option<i64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| DictError::ParentNotNumeric {
            input: trimmed.to_string(),
        })
}

/// Raw item input as entered by the caller
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub code: String,
    pub name: String,
}

impl ItemDraft {
    /// Validate required fields and produce a write payload for `dict_id`
    ///
    /// # Errors
    /// * `RequiredFieldEmpty` - code or name is empty or whitespace-only
    pub fn validate(&self, dict_id: i64) -> Result<NewItem> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(DictError::RequiredFieldEmpty { field: "code" });
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(DictError::RequiredFieldEmpty { field: "name" });
        }

        Ok(NewItem {
            dict_id,
            code: code.to_string(),
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_draft_valid() {
        let draft = DictionaryDraft {
            name: "  Країни  ".to_string(),
            code: "COUNTRIES".to_string(),
            description: String::new(),
            parent: String::new(),
        };

        let payload = draft.validate().unwrap();
        assert_eq!(payload.name, "Країни");
        assert_eq!(payload.code, "COUNTRIES");
        assert_eq!(payload.parent_id, None);
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_dictionary_draft_empty_name_rejected() {
        let draft = DictionaryDraft {
            name: "   ".to_string(),
            code: "X".to_string(),
            ..Default::default()
        };

        let err = draft.validate().unwrap_err();
        assert_eq!(err, DictError::RequiredFieldEmpty { field: "name" });
    }

    #[test]
    fn test_dictionary_draft_empty_code_rejected() {
        let draft = DictionaryDraft {
            name: "X".to_string(),
            code: String::new(),
            ..Default::default()
        };

        let err = draft.validate().unwrap_err();
        assert_eq!(err, DictError::RequiredFieldEmpty { field: "code" });
    }

    #[test]
    fn test_dictionary_draft_numeric_parent() {
        let draft = DictionaryDraft {
            name: "X".to_string(),
            code: "X".to_string(),
            parent: " 7 ".to_string(),
            ..Default::default()
        };

        let payload = draft.validate().unwrap();
        assert_eq!(payload.parent_id, Some(7));
    }

    #[test]
    fn test_dictionary_draft_non_numeric_parent_rejected() {
        let draft = DictionaryDraft {
            name: "X".to_string(),
            code: "X".to_string(),
            parent: "seven".to_string(),
            ..Default::default()
        };

        let err = draft.validate().unwrap_err();
        assert_eq!(err.code(), "parent-not-numeric");
    }

    #[test]
    fn test_description_trimmed_to_none() {
        let draft = DictionaryDraft {
            name: "X".to_string(),
            code: "X".to_string(),
            description: "  ".to_string(),
            ..Default::default()
        };

        assert_eq!(draft.validate().unwrap().description, None);
    }

    #[test]
    fn test_item_draft_valid() {
        let draft = ItemDraft {
            code: "UA".to_string(),
            name: " Україна ".to_string(),
        };

        let payload = draft.validate(3).unwrap();
        assert_eq!(payload.dict_id, 3);
        assert_eq!(payload.code, "UA");
        assert_eq!(payload.name, "Україна");
    }

    #[test]
    fn test_item_draft_empty_fields_rejected() {
        let draft = ItemDraft {
            code: String::new(),
            name: "X".to_string(),
        };
        assert_eq!(
            draft.validate(1).unwrap_err().code(),
            "empty-required-field"
        );

        let draft = ItemDraft {
            code: "X".to_string(),
            name: "\t".to_string(),
        };
        assert_eq!(
            draft.validate(1).unwrap_err().code(),
            "empty-required-field"
        );
    }
}
