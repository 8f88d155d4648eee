//! Catalog routes — read-only listing and lookup.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use catalog::CatalogItem;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive title substring; absent or empty lists everything.
    #[serde(default)]
    pub q: Option<String>,
}

/// `GET /api/catalog` — items in catalog order, optionally filtered by `q`.
pub async fn list_catalog(State(state): State<AppState>, Query(query): Query<CatalogQuery>) -> Json<Vec<CatalogItem>> {
    let needle = query.q.unwrap_or_default();
    let items: Vec<CatalogItem> = state.catalog.search(&needle).into_iter().cloned().collect();
    tracing::debug!(query = %needle, matches = items.len(), "catalog listed");
    Json(items)
}

/// `GET /api/catalog/:id` — one item, or 404.
pub async fn get_catalog_item(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CatalogItem>, StatusCode> {
    state.catalog.get(id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
