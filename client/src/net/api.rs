//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the catalog is fetched
//! in the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display strings instead of panics so a
//! failed catalog fetch degrades to an error banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::CatalogItem;

/// Catalog listing endpoint served by the host server.
pub const CATALOG_ENDPOINT: &str = "/api/catalog";

#[cfg(any(test, feature = "hydrate"))]
fn catalog_request_failed_message(status: u16) -> String {
    format!("catalog request failed: {status}")
}

/// Fetch every catalog item from `GET /api/catalog`, in catalog order.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a list of items.
pub async fn fetch_catalog() -> Result<Vec<CatalogItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CATALOG_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(catalog_request_failed_message(resp.status()));
        }
        resp.json::<Vec<CatalogItem>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
