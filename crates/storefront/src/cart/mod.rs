//! Cart state and persistence engine.
//!
//! # Architecture
//!
//! One [`CartEngine`] owns the cart for the lifetime of a session. It
//! is cheaply cloneable via `Arc`, so every consumer (catalog view,
//! cart view, checkout) holds the same state container by reference
//! rather than reading ambient globals.
//!
//! Every mutation is write-through: the full cart is serialized and
//! handed to the [`CartStore`] before the mutating call returns, so the
//! store never lags behind the last completed mutation. Storage and
//! input failures are recovered locally (logged, state falls back to a
//! safe default) and never surface to callers.

mod store;

pub use store::{CART_STORAGE_KEY, CartStore, FileStore, MemoryStore, StoreError};

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, error, warn};

use mystore_core::{CartLine, ProductId, RawPrice, normalize};

/// Observer invoked with the committed cart after each mutation.
type Subscriber = Box<dyn Fn(&[CartLine]) + Send + Sync>;

/// Input for [`CartEngine::add`].
///
/// Mirrors what a product card or detail page knows about a product.
/// The price arrives raw and is normalized on entry; it is captured at
/// first add and left untouched by repeat adds of the same product.
#[derive(Debug, Clone)]
pub struct AddToCart {
    /// Catalog product identifier; required.
    pub product_id: ProductId,
    /// Raw price as displayed (number or currency-formatted string).
    pub price: Option<RawPrice>,
    /// Product image URL.
    pub image: String,
    /// Optional display name.
    pub name: Option<String>,
}

/// In-memory cart with write-through persistence.
///
/// Cheaply cloneable; all clones share the same state.
#[derive(Clone)]
pub struct CartEngine {
    inner: Arc<CartEngineInner>,
}

struct CartEngineInner {
    store: Box<dyn CartStore>,
    lines: Mutex<Vec<CartLine>>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl CartEngine {
    /// Open the cart engine, rehydrating state from the store.
    ///
    /// This is the sole storage read of the session. A missing or
    /// malformed blob starts an empty cart; the failure is logged and
    /// never propagated.
    #[must_use]
    pub fn open(store: impl CartStore + 'static) -> Self {
        let lines = match store.get(CART_STORAGE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<CartLine>>(&blob) {
                Ok(lines) => lines,
                Err(e) => {
                    warn!("Stored cart is malformed, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read stored cart, starting empty: {e}");
                Vec::new()
            }
        };

        debug!(lines = lines.len(), "Cart engine opened");

        Self {
            inner: Arc::new(CartEngineInner {
                store: Box::new(store),
                lines: Mutex::new(lines),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Add a product to the cart, or bump its quantity if present.
    ///
    /// An input with a blank product ID is rejected silently (logged,
    /// no state change). The price is normalized once here; an existing
    /// line keeps its original price, name, and image.
    pub fn add(&self, input: AddToCart) {
        if input.product_id.is_empty() {
            warn!("Rejected add-to-cart with blank product ID");
            return;
        }

        let snapshot = {
            let mut lines = self.lock_lines();

            if let Some(line) = lines
                .iter_mut()
                .find(|line| line.product_id == input.product_id)
            {
                // update_quantity accepts any u64, so a line can
                // already sit at the ceiling
                line.quantity = line.quantity.saturating_add(1);
            } else {
                lines.push(CartLine {
                    product_id: input.product_id,
                    name: input.name,
                    price: normalize(input.price.as_ref()),
                    image: input.image,
                    quantity: 1,
                });
            }

            self.persist(&lines);
            lines.clone()
        };

        self.notify(&snapshot);
    }

    /// Remove a product's line entirely. Absent IDs are a no-op, not
    /// an error.
    pub fn remove(&self, product_id: &ProductId) {
        let snapshot = {
            let mut lines = self.lock_lines();
            lines.retain(|line| &line.product_id != product_id);
            self.persist(&lines);
            lines.clone()
        };

        self.notify(&snapshot);
    }

    /// Set a line's quantity from raw (possibly user-typed) input.
    ///
    /// A value that fails to parse as an integer, or parses to zero or
    /// below, removes the line - the quantity invariant is "at least 1
    /// or gone". Anything positive is stored verbatim; there is no
    /// upper clamp.
    pub fn update_quantity(&self, product_id: &ProductId, raw_quantity: &str) {
        let Ok(quantity) = raw_quantity.trim().parse::<u64>() else {
            // Covers negatives, garbage, and empty input
            self.remove(product_id);
            return;
        };

        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        let snapshot = {
            let mut lines = self.lock_lines();
            if let Some(line) = lines
                .iter_mut()
                .find(|line| &line.product_id == product_id)
            {
                line.quantity = quantity;
            }
            self.persist(&lines);
            lines.clone()
        };

        self.notify(&snapshot);
    }

    /// Empty the cart.
    pub fn clear(&self) {
        let snapshot = {
            let mut lines = self.lock_lines();
            lines.clear();
            self.persist(&lines);
            lines.clone()
        };

        self.notify(&snapshot);
    }

    /// Sum of line totals. Pure read; mutates nothing.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.lock_lines().iter().map(CartLine::line_total).sum()
    }

    /// Snapshot of the cart lines in first-added order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock_lines().clone()
    }

    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_lines().is_empty()
    }

    /// Register an observer called synchronously with the committed
    /// cart after every mutation.
    pub fn subscribe(&self, subscriber: impl Fn(&[CartLine]) + Send + Sync + 'static) {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(subscriber));
    }

    fn lock_lines(&self) -> std::sync::MutexGuard<'_, Vec<CartLine>> {
        self.inner
            .lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Serialize the full cart and hand it to the store before the
    /// mutation returns. A failed write leaves in-memory state intact
    /// and is logged, never propagated.
    fn persist(&self, lines: &[CartLine]) {
        match serde_json::to_string(lines) {
            Ok(blob) => {
                if let Err(e) = self.inner.store.set(CART_STORAGE_KEY, &blob) {
                    error!("Failed to persist cart: {e}");
                }
            }
            Err(e) => error!("Failed to serialize cart: {e}"),
        }
    }

    fn notify(&self, lines: &[CartLine]) {
        let subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for subscriber in subscribers.iter() {
            subscriber(lines);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn add_input(id: &str, price: Option<RawPrice>) -> AddToCart {
        AddToCart {
            product_id: ProductId::new(id),
            price,
            image: format!("https://cdn.example.com/{id}.jpg"),
            name: None,
        }
    }

    #[test]
    fn test_add_new_product() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("p1", Some(RawPrice::from("$1,234.56"))));

        let lines = engine.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(lines[0].price, 1234.56);
    }

    #[test]
    fn test_add_same_product_twice_bumps_quantity() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("p1", Some(RawPrice::from(10.0))));
        engine.add(add_input("p1", Some(RawPrice::from(999.0))));

        let lines = engine.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        // Price is captured at first add only
        assert_eq!(lines[0].price, 10.0);
    }

    #[test]
    fn test_add_at_max_quantity_saturates() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("p1", Some(RawPrice::from(10.0))));
        engine.update_quantity(&ProductId::new("p1"), &u64::MAX.to_string());

        // A further add must not wrap the quantity back to zero
        engine.add(add_input("p1", Some(RawPrice::from(10.0))));
        assert_eq!(engine.lines()[0].quantity, u64::MAX);
    }

    #[test]
    fn test_add_blank_product_id_is_rejected() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("", Some(RawPrice::from(10.0))));
        engine.add(add_input("   ", Some(RawPrice::from(10.0))));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("p1", Some(RawPrice::from(10.0))));
        engine.remove(&ProductId::new("not-in-cart"));
        assert_eq!(engine.lines().len(), 1);
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("p1", Some(RawPrice::from(10.0))));
        engine.update_quantity(&ProductId::new("p1"), "7");
        assert_eq!(engine.lines()[0].quantity, 7);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("p1", Some(RawPrice::from(10.0))));
        engine.update_quantity(&ProductId::new("p1"), "0");
        assert!(engine.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("p1", Some(RawPrice::from(10.0))));
        engine.update_quantity(&ProductId::new("p1"), "-3");
        assert!(engine.is_empty());
    }

    #[test]
    fn test_update_quantity_garbage_removes_line() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("p1", Some(RawPrice::from(10.0))));
        engine.update_quantity(&ProductId::new("p1"), "lots");
        assert!(engine.is_empty());
    }

    #[test]
    fn test_total_price() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("p1", Some(RawPrice::from(10.0))));
        engine.update_quantity(&ProductId::new("p1"), "2");
        engine.add(add_input("p2", Some(RawPrice::from(5.0))));
        engine.update_quantity(&ProductId::new("p2"), "3");

        assert_eq!(engine.total_price(), 35.0);
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let store = Arc::new(MemoryStore::new());

        // Box<dyn CartStore> via a forwarding impl on Arc
        struct Shared(Arc<MemoryStore>);
        impl CartStore for Shared {
            fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
                self.0.get(key)
            }
            fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
                self.0.set(key, value)
            }
        }

        let engine = CartEngine::open(Shared(Arc::clone(&store)));
        engine.add(add_input("p1", Some(RawPrice::from(10.0))));

        let blob = store.get(CART_STORAGE_KEY).unwrap().unwrap();
        let persisted: Vec<CartLine> = serde_json::from_str(&blob).unwrap();
        assert_eq!(persisted.len(), 1);

        engine.clear();
        let blob = store.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(blob, "[]");
    }

    #[test]
    fn test_rehydrates_from_stored_blob() {
        let blob = r#"[{"productId":"p1","price":10.0,"image":"i","quantity":2}]"#;
        let engine = CartEngine::open(MemoryStore::with_value(CART_STORAGE_KEY, blob));

        let lines = engine.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_malformed_blob_starts_empty() {
        let engine =
            CartEngine::open(MemoryStore::with_value(CART_STORAGE_KEY, "{not json"));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_subscribers_observe_committed_state() {
        let engine = CartEngine::open(MemoryStore::new());
        let seen = Arc::new(AtomicUsize::new(0));

        let observer_seen = Arc::clone(&seen);
        engine.subscribe(move |lines| {
            observer_seen.store(lines.len(), Ordering::SeqCst);
        });

        engine.add(add_input("p1", Some(RawPrice::from(10.0))));
        engine.add(add_input("p2", Some(RawPrice::from(5.0))));
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        engine.clear();
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_insertion_order_is_first_added_order() {
        let engine = CartEngine::open(MemoryStore::new());
        engine.add(add_input("b", Some(RawPrice::from(1.0))));
        engine.add(add_input("a", Some(RawPrice::from(2.0))));
        engine.add(add_input("b", Some(RawPrice::from(3.0))));

        let ids: Vec<_> = engine
            .lines()
            .into_iter()
            .map(|line| line.product_id.into_inner())
            .collect();
        assert_eq!(ids, vec!["b".to_owned(), "a".to_owned()]);
    }
}
