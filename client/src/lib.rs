//! # client
//!
//! Leptos + WASM frontend for the Steam Keys storefront.
//!
//! This crate contains the storefront page, its presentational components,
//! page-local reactive state, and the REST helper that loads the catalog.
//! Catalog, cart and search semantics live in the `catalog` crate; this crate
//! only wires them to signals and markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
