use std::collections::HashSet;

use tryloom_core::{Catalog, Category, FALLBACK_PRODUCT_COUNT, SAMPLE_IMAGES};

#[test]
fn bundled_catalog_has_unique_ids_and_complete_fields() {
    let catalog = Catalog::reference();
    let mut ids = HashSet::new();
    for product in &catalog.products {
        assert!(ids.insert(product.id.as_str()), "duplicate {}", product.id);
        assert!(!product.name.is_empty());
        assert!(product.image.starts_with("https://"), "{}", product.image);
        assert!(product.price.starts_with('$'), "{}", product.price);
    }
}

#[test]
fn bundled_catalog_covers_every_category_evenly() {
    let catalog = Catalog::reference();
    for category in Category::ALL {
        assert_eq!(catalog.filter(Some(category)).len(), 6, "{category}");
    }
    assert!(catalog.len() >= FALLBACK_PRODUCT_COUNT);
}

#[test]
fn catalog_serializes_back_to_equivalent_json() {
    let catalog = Catalog::reference();
    let json = serde_json::to_string(catalog).unwrap();
    let parsed = Catalog::from_json(&json).unwrap();
    assert_eq!(&parsed, catalog);
}

#[test]
fn sample_ids_are_unique() {
    let ids: HashSet<&str> = SAMPLE_IMAGES.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), SAMPLE_IMAGES.len());
}
