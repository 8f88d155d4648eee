//! Client-side shopping cart.
//!
//! The cart is an ordered list of item copies, not quantity lines: adding the
//! same key twice yields two entries, and removing by id drops every entry for
//! that id at once.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::item::CatalogItem;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CatalogItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `item`. Stock is not checked here; the storefront
    /// disables the add control for out-of-stock items instead.
    pub fn add(&mut self, item: &CatalogItem) {
        self.entries.push(item.clone());
    }

    /// Remove every entry with catalog id `id`. Returns how many were removed;
    /// zero means the cart is unchanged.
    pub fn remove(&mut self, id: u32) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before - self.entries.len()
    }

    /// Sum of entry prices. Discounts are never applied.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.price)).sum()
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogItem] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries carrying catalog id `id`.
    #[must_use]
    pub fn count_of(&self, id: u32) -> usize {
        self.entries.iter().filter(|entry| entry.id == id).count()
    }
}
