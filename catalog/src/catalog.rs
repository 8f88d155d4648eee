//! Fixed, ordered catalog of game keys and the title search filter.
//!
//! DESIGN
//! ======
//! The catalog is built once at startup, either from a JSON content source or
//! from the built-in sample set, and is never mutated afterwards. Validation
//! happens at construction so every other consumer can assume unique ids.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::item::CatalogItem;

/// Error returned when a catalog cannot be built from a content source.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The content is not a JSON array of catalog items.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two items share the same id.
    #[error("duplicate catalog id: {0}")]
    DuplicateId(u32),
}

/// Read-only, ordered sequence of [`CatalogItem`]s with unique ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from items, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] for the first repeated id.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed JSON or
    /// [`CatalogError::DuplicateId`] on repeated ids.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(raw)?;
        Self::from_items(items)
    }

    /// Load a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&raw)
    }

    /// The built-in four-title sample catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self { items: sample_items() }
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose title contains `query`, case-insensitively, in catalog order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CatalogItem> {
        filter_catalog(&self.items, query)
    }
}

/// Ordered subsequence of `items` whose title contains `query` as a
/// case-insensitive substring. An empty query returns every item.
#[must_use]
pub fn filter_catalog<'a>(items: &'a [CatalogItem], query: &str) -> Vec<&'a CatalogItem> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items.iter().filter(|item| item.title_contains(&needle)).collect()
}

fn sample_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: 1,
            title: "Cyberpunk 2077".to_owned(),
            price: 1299,
            original_price: Some(1999),
            discount: Some(35),
            image: "/img/b0bc0aaa-3251-4237-8976-58f8a90bec14.jpg".to_owned(),
            platform: "Steam".to_owned(),
            genre: vec!["Экшен".to_owned(), "RPG".to_owned()],
            rating: 4.2,
            in_stock: true,
        },
        CatalogItem {
            id: 2,
            title: "Elden Ring".to_owned(),
            price: 2499,
            original_price: None,
            discount: None,
            image: "/img/32e8eac8-6fe4-4a93-98ca-2975e4962f02.jpg".to_owned(),
            platform: "Steam".to_owned(),
            genre: vec!["RPG".to_owned(), "Фэнтези".to_owned()],
            rating: 4.8,
            in_stock: true,
        },
        CatalogItem {
            id: 3,
            title: "Call of Duty: Modern Warfare III".to_owned(),
            price: 3599,
            original_price: Some(4299),
            discount: Some(16),
            image: "/placeholder.svg".to_owned(),
            platform: "Steam".to_owned(),
            genre: vec!["Шутер".to_owned(), "Мультиплеер".to_owned()],
            rating: 4.1,
            in_stock: true,
        },
        CatalogItem {
            id: 4,
            title: "FIFA 24".to_owned(),
            price: 2299,
            original_price: None,
            discount: None,
            image: "/placeholder.svg".to_owned(),
            platform: "Steam".to_owned(),
            genre: vec!["Спорт".to_owned(), "Симулятор".to_owned()],
            rating: 4.3,
            in_stock: false,
        },
    ]
}
