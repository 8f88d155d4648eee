use super::*;
use crate::state::test_helpers::test_app_state;

fn titles(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

#[tokio::test]
async fn list_catalog_without_query_returns_everything_in_order() {
    let Json(items) = list_catalog(State(test_app_state()), Query(CatalogQuery::default())).await;
    assert_eq!(
        titles(&items),
        vec!["Cyberpunk 2077", "Elden Ring", "Call of Duty: Modern Warfare III", "FIFA 24"]
    );
}

#[tokio::test]
async fn list_catalog_filters_case_insensitively() {
    let query = CatalogQuery { q: Some("RING".to_owned()) };
    let Json(items) = list_catalog(State(test_app_state()), Query(query)).await;
    assert_eq!(titles(&items), vec!["Elden Ring"]);
}

#[tokio::test]
async fn list_catalog_unmatched_query_is_empty() {
    let query = CatalogQuery { q: Some("zelda".to_owned()) };
    let Json(items) = list_catalog(State(test_app_state()), Query(query)).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn list_catalog_serializes_camel_case() {
    let Json(items) = list_catalog(State(test_app_state()), Query(CatalogQuery::default())).await;
    let body = serde_json::to_value(&items).unwrap();
    assert_eq!(body[0]["originalPrice"], 1999);
    assert_eq!(body[3]["inStock"], false);
    assert!(body[1].get("discount").is_none());
}

#[tokio::test]
async fn get_catalog_item_returns_item() {
    let Json(item) = get_catalog_item(State(test_app_state()), Path(2)).await.unwrap();
    assert_eq!(item.title, "Elden Ring");
    assert_eq!(item.price, 2499);
}

#[tokio::test]
async fn get_catalog_item_unknown_id_is_not_found() {
    let err = get_catalog_item(State(test_app_state()), Path(99)).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}
