//! Catalog and cart domain model for the Steam Keys storefront.
//!
//! This crate is UI-framework agnostic so the Leptos client and the axum
//! server can share one definition of a game key, the search filter, and the
//! cart arithmetic.
//!
//! ARCHITECTURE
//! ============
//! - [`item`] — the read-only [`CatalogItem`] record.
//! - [`catalog`] — the validated, ordered [`Catalog`] plus the title filter.
//! - [`cart`] — the ordered [`Cart`] of item copies.
//! - [`storefront`] — [`StorefrontState`], the explicit owned page state the
//!   client wraps in a signal.

pub mod cart;
pub mod catalog;
pub mod item;
pub mod storefront;

pub use cart::Cart;
pub use catalog::{Catalog, CatalogError, filter_catalog};
pub use item::CatalogItem;
pub use storefront::StorefrontState;
