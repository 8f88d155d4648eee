//! Loading status of the catalog content source.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront page fetches `/api/catalog` after hydration. This state
//! drives the loading/error placeholders and installs the fetched items into
//! the shared `StorefrontState` exactly once.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::Arc;

use catalog::{Catalog, CatalogItem, StorefrontState};

/// Catalog fetch lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogState {
    /// True until the first fetch resolves.
    pub loading: bool,
    /// Human-readable failure, if the fetch or validation failed.
    pub error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self { loading: true, error: None }
    }
}

impl CatalogState {
    /// Apply a fetch result: on success, validate the items and install them
    /// into `storefront`; on failure, record the message.
    pub fn install(&mut self, storefront: &mut StorefrontState, result: Result<Vec<CatalogItem>, String>) {
        self.loading = false;
        match result.and_then(|items| Catalog::from_items(items).map_err(|e| e.to_string())) {
            Ok(catalog) => {
                storefront.set_catalog(Arc::new(catalog));
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }
}
