use serde::{Deserialize, Serialize};

/// Item - one coded entry belonging to exactly one dictionary
///
/// Items are leaves; they carry no hierarchy of their own and are deleted
/// together with their owning dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Storage-assigned identifier
    pub id: i64,

    /// Owning dictionary id
    pub dict_id: i64,

    /// Short identifier within the dictionary
    pub code: String,

    /// Display name
    pub name: String,
}

/// Field set for creating or overwriting an item, before an id exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub dict_id: i64,
    pub code: String,
    pub name: String,
}
