use super::*;

fn item(id: u32, title: &str, price: u32) -> CatalogItem {
    CatalogItem {
        id,
        title: title.to_owned(),
        price,
        original_price: None,
        discount: None,
        image: "/placeholder.svg".to_owned(),
        platform: "Steam".to_owned(),
        genre: Vec::new(),
        rating: 4.0,
        in_stock: true,
    }
}

fn titles(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|i| i.title.clone()).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn sample_catalog_has_four_items_in_order() {
    let catalog = Catalog::sample();
    let ids: Vec<u32> = catalog.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(catalog.len(), 4);
    assert!(!catalog.is_empty());
}

#[test]
fn sample_catalog_marks_fifa_out_of_stock() {
    let catalog = Catalog::sample();
    let fifa = catalog.get(4).unwrap();
    assert_eq!(fifa.title, "FIFA 24");
    assert_eq!(fifa.price, 2299);
    assert!(!fifa.in_stock);
}

#[test]
fn from_items_rejects_duplicate_ids() {
    let err = Catalog::from_items(vec![item(1, "A", 10), item(2, "B", 20), item(1, "C", 30)]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(1)));
    assert_eq!(err.to_string(), "duplicate catalog id: 1");
}

#[test]
fn from_items_accepts_empty_catalog() {
    let catalog = Catalog::from_items(Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.search("").is_empty());
}

#[test]
fn from_json_str_reads_camel_case_fields() {
    let raw = r#"[
        {"id": 7, "title": "Hades", "price": 499, "originalPrice": 799, "discount": 38,
         "image": "/img/hades.jpg", "platform": "Steam", "genre": ["Roguelike"],
         "rating": 4.9, "inStock": true},
        {"id": 8, "title": "Celeste", "price": 299, "image": "/img/celeste.jpg",
         "platform": "Steam", "rating": 4.7, "inStock": false}
    ]"#;
    let catalog = Catalog::from_json_str(raw).unwrap();
    assert_eq!(catalog.len(), 2);

    let hades = catalog.get(7).unwrap();
    assert_eq!(hades.original_price, Some(799));
    assert_eq!(hades.discount, Some(38));
    assert!(hades.is_discounted());

    let celeste = catalog.get(8).unwrap();
    assert_eq!(celeste.original_price, None);
    assert!(celeste.genre.is_empty());
    assert!(!celeste.in_stock);
}

#[test]
fn from_json_str_rejects_non_array() {
    let err = Catalog::from_json_str(r#"{"id": 1}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn from_json_str_rejects_duplicate_ids() {
    let raw = r#"[
        {"id": 1, "title": "A", "price": 1, "image": "", "platform": "Steam", "rating": 1.0, "inStock": true},
        {"id": 1, "title": "B", "price": 2, "image": "", "platform": "Steam", "rating": 1.0, "inStock": true}
    ]"#;
    assert!(matches!(Catalog::from_json_str(raw), Err(CatalogError::DuplicateId(1))));
}

#[test]
fn from_path_reports_missing_file() {
    let err = Catalog::from_path("/definitely/not/here/catalog.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here/catalog.json"));
}

#[test]
fn serialized_sample_round_trips_through_json_loader() {
    let sample = Catalog::sample();
    let raw = serde_json::to_string(sample.items()).unwrap();
    assert!(raw.contains("\"inStock\":false"));
    assert!(raw.contains("\"originalPrice\":1999"));
    assert_eq!(Catalog::from_json_str(&raw).unwrap(), sample);
}

#[test]
fn get_unknown_id_is_none() {
    assert!(Catalog::sample().get(99).is_none());
}

// =============================================================
// Filter
// =============================================================

#[test]
fn empty_query_returns_whole_catalog_in_order() {
    let catalog = Catalog::sample();
    let all = filter_catalog(catalog.items(), "");
    assert_eq!(
        titles(&all),
        vec!["Cyberpunk 2077", "Elden Ring", "Call of Duty: Modern Warfare III", "FIFA 24"]
    );
}

#[test]
fn ring_matches_only_elden_ring() {
    let catalog = Catalog::sample();
    assert_eq!(titles(&catalog.search("ring")), vec!["Elden Ring"]);
}

#[test]
fn query_is_case_insensitive() {
    let catalog = Catalog::sample();
    assert_eq!(titles(&catalog.search("RING")), vec!["Elden Ring"]);
    assert_eq!(titles(&catalog.search("cYbEr")), vec!["Cyberpunk 2077"]);
}

#[test]
fn unmatched_query_is_empty() {
    assert!(Catalog::sample().search("zelda").is_empty());
}

#[test]
fn matches_preserve_catalog_order() {
    let items = vec![item(1, "Alpha Strike", 1), item(2, "Beta", 2), item(3, "Gamma Strike", 3)];
    let hits = filter_catalog(&items, "strike");
    let ids: Vec<u32> = hits.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn every_match_contains_query_lowercased() {
    let catalog = Catalog::sample();
    for query in ["", "a", "2", " ", "of", "FIFA", "iii", "x"] {
        let needle = query.to_lowercase();
        let hits = catalog.search(query);
        for hit in &hits {
            assert!(hit.title.to_lowercase().contains(&needle), "{} should contain {query}", hit.title);
        }
        let expected = catalog
            .items()
            .iter()
            .filter(|i| i.title.to_lowercase().contains(&needle))
            .count();
        assert_eq!(hits.len(), expected, "query {query:?}");
    }
}

#[test]
fn query_matches_cyrillic_titles_case_insensitively() {
    let items = vec![item(1, "Ведьмак 3", 1), item(2, "Elden Ring", 2)];
    let hits = filter_catalog(&items, "ВЕДЬ");
    assert_eq!(titles(&hits), vec!["Ведьмак 3"]);
}
