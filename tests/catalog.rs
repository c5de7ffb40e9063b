//! Catalog loading and lookup through the public crate APIs.

mod common;

use common::{sample_catalog, SAMPLE_CATALOG, SAMPLE_TRIPLES};
use star_catalog::{CatalogLoader, KeyValueStore, MemoryStore};

#[tokio::test]
async fn test_lookup_returns_loaded_fields() {
    let (_, catalog) = sample_catalog().await;

    for (id, (ra, dec, name)) in (1..=3).zip(SAMPLE_TRIPLES) {
        let star = catalog.lookup(id).await.unwrap();
        assert_eq!(star.ra, ra);
        assert_eq!(star.dec, dec);
        assert_eq!(star.title, name);
    }
}

#[tokio::test]
async fn test_reload_is_byte_identical() {
    let store = MemoryStore::new();
    let loader = CatalogLoader::new(&store, "BSC");

    let first = loader.load_file(SAMPLE_CATALOG).await.unwrap();
    let mut snapshot = Vec::new();
    for id in ["1", "2", "3"] {
        snapshot.push(store.get("BSC", id).await.unwrap());
    }

    let second = loader.load_file(SAMPLE_CATALOG).await.unwrap();
    for (id, before) in ["1", "2", "3"].into_iter().zip(snapshot) {
        assert_eq!(store.get("BSC", id).await.unwrap(), before);
    }

    assert_eq!(first.records, 3);
    assert_eq!(second.records, 3);
    assert_eq!(store.len("BSC").await, 3);
}

#[tokio::test]
async fn test_stored_value_keeps_every_field() {
    let (store, _) = sample_catalog().await;
    let raw = store.get("BSC", "3").await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["Vmag"], 4.61);
    assert_eq!(value["harvard_ref_#"], 3);
}
