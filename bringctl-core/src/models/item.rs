//! Shopping list items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry on a shopping list.
///
/// An item has no identity beyond its name/specification pair; equality is
/// structural and the value never changes once constructed. The remote
/// service keys mutations by name alone, the specification is free-text
/// detail ("2", "the big bottle", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name as it appears on the list.
    pub name: String,

    /// Free-text detail for the item. Empty means unspecified.
    #[serde(default)]
    pub specification: String,
}

impl Item {
    /// Creates an item from a name and specification.
    pub fn new(name: impl Into<String>, specification: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specification: specification.into(),
        }
    }

    /// Returns true when no specification was given.
    pub fn is_unspecified(&self) -> bool {
        self.specification.is_empty()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unspecified() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.specification)
        }
    }
}
