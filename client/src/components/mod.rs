//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and read/write the shared
//! `StorefrontState` and `UiState` signals from Leptos context.

pub mod cart_dialog;
pub mod game_card;
pub mod hero;
pub mod legal_docs;
pub mod site_footer;
pub mod site_header;
