use serde::{Deserialize, Serialize};

/// Dictionary - a named, optionally-nested classification table
///
/// Dictionaries form a forest through `parent_id` references. A dictionary
/// without a parent is a root. The id is assigned by storage on creation
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Storage-assigned identifier
    pub id: i64,

    /// Optional parent dictionary id (None for roots)
    pub parent_id: Option<i64>,

    /// Display name
    pub name: String,

    /// Short identifier, not enforced unique
    pub code: String,

    /// Optional free text
    pub description: Option<String>,
}

impl Dictionary {
    /// Check if this dictionary is a root (has no parent)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this dictionary has a parent
    pub fn has_parent(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Field set for creating or overwriting a dictionary, before an id exists
///
/// Produced by draft validation; optional fields are already normalized
/// (`None`, never empty strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDictionary {
    pub parent_id: Option<i64>,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_dictionary() {
        let dict = Dictionary {
            id: 1,
            parent_id: None,
            name: "Країни".to_string(),
            code: "COUNTRIES".to_string(),
            description: None,
        };

        assert!(dict.is_root());
        assert!(!dict.has_parent());
    }

    #[test]
    fn test_nested_dictionary() {
        let dict = Dictionary {
            id: 2,
            parent_id: Some(1),
            name: "Мови".to_string(),
            code: "LANGUAGES".to_string(),
            description: Some("Список мов.".to_string()),
        };

        assert!(!dict.is_root());
        assert!(dict.has_parent());
    }
}
