//! Cart persistence round-trips through a real file store.
//!
//! Each test simulates separate "sessions" by opening a fresh engine
//! over the same storage directory: whatever the previous session
//! persisted is what the next one rehydrates.

#![allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]

use mystore_core::{CartLine, ProductId, RawPrice};
use mystore_integration_tests::scratch_dir;
use mystore_storefront::{AddToCart, CartEngine, CartStore, FileStore};
use mystore_storefront::cart::CART_STORAGE_KEY;

fn add(engine: &CartEngine, id: &str, price: &str) {
    engine.add(AddToCart {
        product_id: ProductId::new(id),
        price: Some(RawPrice::from(price)),
        image: format!("https://cdn.example.com/{id}.jpg"),
        name: Some(id.to_uppercase()),
    });
}

#[test]
fn cart_survives_engine_restart() {
    let dir = scratch_dir("restart");

    {
        let session = CartEngine::open(FileStore::new(dir.clone()));
        add(&session, "laptop-17", "$1,299.99");
        add(&session, "mouse-3", "25");
        session.update_quantity(&ProductId::new("mouse-3"), "4");
    }

    let next_session = CartEngine::open(FileStore::new(dir));
    let lines = next_session.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].product_id, ProductId::new("laptop-17"));
    assert_eq!(lines[0].price, 1299.99);
    assert_eq!(lines[1].quantity, 4);
}

#[test]
fn cleared_cart_restarts_empty() {
    let dir = scratch_dir("clear");

    {
        let session = CartEngine::open(FileStore::new(dir.clone()));
        add(&session, "laptop-17", "999");
        session.clear();
    }

    // The persisted blob is an empty array, not a missing file
    let store = FileStore::new(dir.clone());
    assert_eq!(store.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));

    let next_session = CartEngine::open(store);
    assert!(next_session.is_empty());
}

#[test]
fn corrupted_blob_falls_back_to_empty_cart() {
    let dir = scratch_dir("corrupt");

    let store = FileStore::new(dir.clone());
    store.set(CART_STORAGE_KEY, "definitely not json [").unwrap();

    let session = CartEngine::open(FileStore::new(dir.clone()));
    assert!(session.is_empty());

    // The corrupted blob is replaced on the first successful mutation
    add(&session, "laptop-17", "999");
    let reread = CartEngine::open(FileStore::new(dir));
    assert_eq!(reread.lines().len(), 1);
}

#[test]
fn write_through_after_every_mutation() {
    let dir = scratch_dir("write-through");
    let session = CartEngine::open(FileStore::new(dir.clone()));
    let store = FileStore::new(dir);

    add(&session, "a", "10");
    let blob = store.get(CART_STORAGE_KEY).unwrap().unwrap();
    let persisted: Vec<CartLine> = serde_json::from_str(&blob).unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].product_id, ProductId::new("a"));

    session.update_quantity(&ProductId::new("a"), "5");
    let blob = store.get(CART_STORAGE_KEY).unwrap().unwrap();
    let persisted: Vec<CartLine> = serde_json::from_str(&blob).unwrap();
    assert_eq!(persisted[0].quantity, 5);

    session.remove(&ProductId::new("a"));
    let blob = store.get(CART_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(blob, "[]");
}

#[test]
fn quantity_of_repeated_adds_round_trips() {
    let dir = scratch_dir("repeat-add");

    {
        let session = CartEngine::open(FileStore::new(dir.clone()));
        add(&session, "laptop-17", "$1,299.99");
        add(&session, "laptop-17", "$9,999.99");
    }

    let next_session = CartEngine::open(FileStore::new(dir));
    let lines = next_session.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 2);
    // First-add price wins
    assert_eq!(lines[0].price, 1299.99);
}
