//! Page-level storefront state: the catalog, the cart, and the search query.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos client keeps one `RwSignal<StorefrontState>` in context and
//! calls these methods from event handlers. Keeping the transitions here lets
//! them be tested without a UI harness.

#[cfg(test)]
#[path = "storefront_test.rs"]
mod storefront_test;

use std::sync::Arc;

use crate::cart::Cart;
use crate::catalog::{Catalog, filter_catalog};
use crate::item::CatalogItem;

/// Cart and search state over a shared read-only catalog.
#[derive(Clone, Debug, Default)]
pub struct StorefrontState {
    catalog: Arc<Catalog>,
    cart: Cart,
    search_query: String,
}

impl StorefrontState {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog, cart: Cart::new(), search_query: String::new() }
    }

    /// Install the catalog once its content source resolves. The cart and
    /// the current query are kept.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Catalog items matching the current search query, in catalog order.
    #[must_use]
    pub fn filtered_catalog(&self) -> Vec<&CatalogItem> {
        filter_catalog(self.catalog.items(), &self.search_query)
    }

    #[must_use]
    pub fn cart_total(&self) -> u64 {
        self.cart.total()
    }

    pub fn add_to_cart(&mut self, item: &CatalogItem) {
        self.cart.add(item);
    }

    /// Drop every cart entry for `id`; see [`Cart::remove`].
    pub fn remove_from_cart(&mut self, id: u32) -> usize {
        self.cart.remove(id)
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }
}
