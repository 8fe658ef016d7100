//! End-to-end walk over the store: seed, detect duplicates, resolve,
//! commit, verify.

use serde_json::json;

use agrikiosk_catalog::{Product, ProductCatalog};
use agrikiosk_dedupe::{find_duplicates, resolve};
use agrikiosk_users::User;

use crate::memory::MemoryStore;
use crate::seed::{commit_resolution, seed_batch};
use crate::store::{EntityKind, Store};

fn load_users(store: &MemoryStore) -> Vec<User> {
    store
        .load_all(EntityKind::Users)
        .unwrap()
        .into_iter()
        .map(|(_, doc)| serde_json::from_value(doc).unwrap())
        .collect()
}

#[test]
fn seed_detect_resolve_commit_roundtrip() {
    agrikiosk_observability::init();
    let store = MemoryStore::new();

    let report = seed_batch(
        &store,
        EntityKind::Users,
        vec![
            json!({ "userCode": "3456", "name": "Jane Doe", "role": "applicator", "isActive": true }),
            json!({ "userCode": "9999", "name": "jane doe", "role": "applicator", "isActive": true }),
            json!({ "userCode": "1111", "name": "Sam Field", "role": "admin", "isActive": true }),
        ],
    );
    assert!(report.is_clean());

    // Detect: one bucket, keyed by the normalized name.
    let users = load_users(&store);
    let buckets = find_duplicates(&users);
    assert_eq!(buckets.len(), 1);
    let bucket = &buckets["jane doe"];
    assert_eq!(bucket.len(), 2);

    // Resolve keeping the original record, then commit the deletions.
    let keep = bucket.iter().find(|u| u.user_code == "3456").unwrap();
    let kept_before = keep.clone();
    let resolution = resolve(bucket, Some(keep.id.entity_id())).unwrap();
    let commit = commit_resolution(&store, EntityKind::Users, &resolution);
    assert!(commit.is_clean());

    // The resolved key is never reported again, the survivor is untouched,
    // and the deleted record is gone from subsequent loads.
    let users = load_users(&store);
    assert_eq!(users.len(), 2);
    assert!(find_duplicates(&users).is_empty());
    let kept_after = users.iter().find(|u| u.user_code == "3456").unwrap();
    assert_eq!(kept_after, &kept_before);
    assert!(users.iter().all(|u| u.user_code != "9999"));
}

#[test]
fn seeded_products_hydrate_into_a_valid_catalog() {
    let store = MemoryStore::new();

    let report = seed_batch(
        &store,
        EntityKind::Products,
        vec![json!({
            "name": "10-10-10 Balanced Fertilizer",
            "category": "fertilizer",
            "unit": "pounds",
            "hoseRatePerGallon": 0.0,
            "cartRatePerGallon": 0.0,
            "poundsPer1000SqFt": 2.3,
            "poundsPerBag": 50.0,
            "kioskTypes": ["fertilizer", "mixed"],
            "isActive": true
        })],
    );
    assert!(report.is_clean());

    let products: Vec<Product> = store
        .load_all(EntityKind::Products)
        .unwrap()
        .into_iter()
        .map(|(_, doc)| serde_json::from_value(doc).unwrap())
        .collect();
    let catalog = ProductCatalog::new(products).unwrap();
    assert!(catalog.get("10-10-10 Balanced Fertilizer").is_some());
}
