//! The store's shelf: product names mapped to how many copies remain.
//!
//! An [`Inventory`] is owned exclusively by the fulfillment worker while
//! the store runs. Every check-and-take goes through [`Inventory::decide`]
//! on that single owner, which is what makes a purchase atomic without
//! any locking.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Outcome, ProductItem};

/// In-memory stock levels, keyed by product name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    shelves: HashMap<String, u32>,
}

impl Inventory {
    /// Builds an inventory from catalog entries. If the same product
    /// appears twice, the last entry wins.
    pub fn stocked(catalog: impl IntoIterator<Item = ProductItem>) -> Self {
        let shelves = catalog
            .into_iter()
            .map(|item| (item.name, item.quantity))
            .collect();
        Self { shelves }
    }

    /// Current stock for a product, or `None` if it was never stocked.
    pub fn stock(&self, product: &str) -> Option<u32> {
        self.shelves.get(product).copied()
    }

    /// How many product lines the store carries, empty shelves included.
    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    /// Checks availability and takes stock in one step.
    ///
    /// The ladder runs top to bottom: unknown product, empty shelf,
    /// not enough copies, sale. Stock changes only on a sale, and only
    /// by the exact quantity sold, so it can never go negative.
    ///
    /// ```
    /// use storefront::{Inventory, Outcome, ProductItem};
    ///
    /// let mut inventory = Inventory::stocked([ProductItem::new("Apple", 6)]);
    /// assert_eq!(inventory.decide("Apple", 4), Outcome::Bought { remaining: 2 });
    /// assert_eq!(inventory.decide("Apple", 4), Outcome::InsufficientStock { available: 2 });
    /// assert_eq!(inventory.decide("Pear", 1), Outcome::UnknownProduct);
    /// ```
    pub fn decide(&mut self, product: &str, quantity: u32) -> Outcome {
        match self.shelves.get_mut(product) {
            None => Outcome::UnknownProduct,
            Some(available) if *available == 0 => Outcome::OutOfStock,
            Some(available) if *available < quantity => Outcome::InsufficientStock {
                available: *available,
            },
            Some(available) => {
                *available -= quantity;
                debug!(product, sold = quantity, remaining = *available, "Stock taken");
                Outcome::Bought {
                    remaining: *available,
                }
            }
        }
    }
}
