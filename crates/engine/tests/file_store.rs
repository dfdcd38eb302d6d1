//! JSON file store tests: durability across handles and corrupt-file handling.

#![allow(clippy::unwrap_used)]

use std::fs;

use mini_pos_core::{Email, ProductId};
use mini_pos_engine::{CartEngine, History, JsonFileStore, KvStore, MemoryStore, OrderEngine, StoreError};

fn user() -> Email {
    Email::parse("shopper@example.com").unwrap()
}

#[test]
fn values_round_trip_across_store_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minipos.json");

    let store = JsonFileStore::new(&path);
    store.set("greeting", serde_json::json!("hello")).unwrap();
    drop(store);

    // A fresh handle over the same file sees the committed write.
    let reopened = JsonFileStore::new(&path);
    assert_eq!(
        reopened.get("greeting").unwrap(),
        Some(serde_json::json!("hello"))
    );

    reopened.delete("greeting").unwrap();
    assert_eq!(reopened.get("greeting").unwrap(), None);
}

#[test]
fn missing_file_reads_as_empty_namespace() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("never-written.json"));

    assert_eq!(store.get("anything").unwrap(), None);
    // Deleting from an absent file neither errors nor creates it.
    store.delete("anything").unwrap();
    assert!(!store.path().exists());
}

#[test]
fn corrupt_file_is_rejected_not_defaulted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minipos.json");
    fs::write(&path, b"{ this is not json").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(store.get("products"), Err(StoreError::Corrupt(_))));
    assert!(matches!(
        store.set("k", serde_json::json!(1)),
        Err(StoreError::Corrupt(_))
    ));
}

#[test]
fn checkout_state_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minipos.json");

    // First "process": cart an item and check out.
    {
        let store = JsonFileStore::new(&path);
        let cart = CartEngine::new(&store);
        cart.add_item(&user(), &ProductId::new("p4")).unwrap();
        OrderEngine::new(&store).checkout(&user()).unwrap();
    }

    // Second "process": history is there, cart is empty.
    let store = JsonFileStore::new(&path);
    let history = History::new(&store).for_user(&user()).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(
        history.first().unwrap().items.first().unwrap().name,
        "Noise-Cancel Headphones"
    );
    assert!(CartEngine::new(&store).is_empty(&user()).unwrap());
}

#[test]
fn memory_and_file_stores_agree_on_engine_behavior() {
    let dir = tempfile::tempdir().unwrap();
    let file_store = JsonFileStore::new(dir.path().join("minipos.json"));
    let memory_store = MemoryStore::new();

    for store in [&file_store as &dyn KvStore, &memory_store as &dyn KvStore] {
        let cart = CartEngine::new(store);
        cart.add_item(&user(), &ProductId::new("p1")).unwrap();
        cart.add_item(&user(), &ProductId::new("p1")).unwrap();
        let totals = cart.compute_totals(&user()).unwrap();
        assert_eq!(totals.grand_total.as_rupees(), 4840);
    }
}
