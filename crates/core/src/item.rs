//! The inventory record stored by every container.

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in an item name.
pub const NAME_MAX_CHARS: usize = 29;

/// Maximum number of characters kept in an item type.
pub const KIND_MAX_CHARS: usize = 19;

/// A named, typed, quantified inventory record.
///
/// Containers identify items by exact, case-sensitive `name` equality. Nothing
/// enforces uniqueness: two items may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    quantity: i32,
}

impl Item {
    /// Build an item, truncating `name` and `kind` to their field widths.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: truncate_chars(name.into(), NAME_MAX_CHARS),
            kind: truncate_chars(kind.into(), KIND_MAX_CHARS),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Identity check used by every lookup: exact name equality.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (Type: {}, Qty: {})",
            self.name, self.kind, self.quantity
        )
    }
}

fn truncate_chars(mut value: String, max_chars: usize) -> String {
    if let Some((idx, _)) = value.char_indices().nth(max_chars) {
        value.truncate(idx);
    }
    value
}
