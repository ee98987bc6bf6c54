//! Catalog entries used to stock the store.

use serde::{Deserialize, Serialize};

/// One product line as it appears on the shelf: a name and how many
/// copies the store starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductItem {
    pub name: String,
    pub quantity: u32,
}

impl ProductItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl From<(&str, u32)> for ProductItem {
    fn from((name, quantity): (&str, u32)) -> Self {
        ProductItem::new(name, quantity)
    }
}
