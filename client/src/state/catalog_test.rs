use super::*;

fn sample_items() -> Vec<CatalogItem> {
    Catalog::sample().items().to_vec()
}

#[test]
fn catalog_state_default_is_loading() {
    let state = CatalogState::default();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn install_success_populates_storefront() {
    let mut state = CatalogState::default();
    let mut storefront = StorefrontState::default();

    state.install(&mut storefront, Ok(sample_items()));

    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(storefront.catalog().len(), 4);
    assert_eq!(storefront.filtered_catalog().len(), 4);
}

#[test]
fn install_failure_records_message_and_leaves_catalog_empty() {
    let mut state = CatalogState::default();
    let mut storefront = StorefrontState::default();

    state.install(&mut storefront, Err("catalog request failed: 500".to_owned()));

    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("catalog request failed: 500"));
    assert!(storefront.catalog().is_empty());
}

#[test]
fn install_rejects_duplicate_ids() {
    let mut state = CatalogState::default();
    let mut storefront = StorefrontState::default();
    let mut items = sample_items();
    items.push(items[0].clone());

    state.install(&mut storefront, Ok(items));

    assert_eq!(state.error.as_deref(), Some("duplicate catalog id: 1"));
    assert!(storefront.catalog().is_empty());
}

#[test]
fn install_keeps_query_typed_before_load() {
    let mut state = CatalogState::default();
    let mut storefront = StorefrontState::default();
    storefront.set_search_query("ring");

    state.install(&mut storefront, Ok(sample_items()));

    let titles: Vec<&str> = storefront.filtered_catalog().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Elden Ring"]);
}
