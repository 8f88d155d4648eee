//! Game key record as it appears in the catalog content source.

use serde::{Deserialize, Serialize};

/// One purchasable game key.
///
/// Items are immutable once the catalog is built. `discount` and
/// `original_price` are display metadata only: nothing derives one from the
/// other and neither feeds into cart totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique catalog identifier.
    pub id: u32,
    pub title: String,
    /// Current price in whole currency units.
    pub price: u32,
    /// Pre-discount price, shown struck through when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    /// Discount percentage for the badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
    /// Image URL or asset path.
    pub image: String,
    /// Distribution platform label, e.g. `Steam`.
    pub platform: String,
    #[serde(default)]
    pub genre: Vec<String>,
    pub rating: f64,
    pub in_stock: bool,
}

impl CatalogItem {
    /// True when the lowercased title contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercased; callers hoist that out of
    /// the per-item loop.
    #[must_use]
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }

    /// True when the item carries a discount badge.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount.is_some()
    }
}
