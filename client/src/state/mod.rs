//! Page-local reactive state for the storefront.
//!
//! ARCHITECTURE
//! ============
//! Cart and search live in `catalog::StorefrontState`; this module holds the
//! remaining client-only state: catalog loading status and UI chrome
//! (cart dialog, legal accordion). Each is provided as an `RwSignal` context
//! by `app::App`.

pub mod catalog;
pub mod legal;
pub mod ui;
