//! Shapes shared by both products.

use serde::{Deserialize, Serialize};

/// Body of every `.../count` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    /// Number of records matching the request conditions.
    pub count: u64,
}

/// Manage's `{id, name}` reference to another record.
///
/// References arrive embedded in most Manage items (`board`, `company`,
/// `status`, ...). `_info` links are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Id of the referenced record.
    pub id: i64,
    /// Display name; omitted on writes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Reference {
    /// A reference by id only, the form Manage accepts on writes.
    pub fn id(id: i64) -> Self {
        Self { id, name: None }
    }
}

/// Message returned by some deletes and actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    /// Server message, if any.
    #[serde(default)]
    pub message: Option<String>,
}
