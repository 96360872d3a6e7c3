//! The cart store.
//!
//! [`CartStore`] is the only component that reads or writes the durable cart
//! snapshot. Every mutator performs a full read-modify-write of the snapshot,
//! persists it, and then publishes [`CART_CHANGE_TOPIC`] exactly once.
//! Subscribers learn the new state by calling [`CartStore::read`],
//! [`CartStore::total`] or [`CartStore::item_count`] themselves.
//!
//! Nothing here fails loudly. A missing or unreadable snapshot reads as an
//! empty cart, and a store constructed without storage (see
//! [`CartStore::detached`]) ignores mutations, so a broken cart never blocks
//! browsing.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use honey_core::{Product, ProductId};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::broadcast::{Broadcaster, CART_CHANGE_TOPIC, EventBus, SubscriptionId};
use crate::line::CartLine;
use crate::storage::{KeyValueStore, MemoryStore};

/// Key the serialized cart is stored under.
pub const CART_STORAGE_KEY: &str = "honey_cart";

/// Owner of the shopping cart.
///
/// The store keeps no in-memory copy: reads always go to storage, so two
/// stores over the same backend agree after every mutator returns.
pub struct CartStore {
    storage: Option<Arc<dyn KeyValueStore>>,
    broadcaster: Arc<dyn Broadcaster>,
    // Serializes read-modify-write across threads. Released before publishing
    // so handlers can call back into the store.
    write_lock: Mutex<()>,
}

impl CartStore {
    /// Create a store persisting to `storage` and notifying through `broadcaster`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self {
            storage: Some(storage),
            broadcaster,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store with no durable storage available.
    ///
    /// Reads return an empty cart and mutators do nothing, including not
    /// notifying. This is the state of a page rendered before any client
    /// storage exists.
    #[must_use]
    pub fn detached(broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self {
            storage: None,
            broadcaster,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store over a fresh [`MemoryStore`] and [`EventBus`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(EventBus::new()))
    }

    /// Whether mutations will be persisted.
    #[must_use]
    pub const fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// The broadcaster change notifications are published on.
    #[must_use]
    pub fn broadcaster(&self) -> &Arc<dyn Broadcaster> {
        &self.broadcaster
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current cart lines in insertion order.
    ///
    /// Never fails: a missing, empty or unparsable snapshot yields an empty
    /// cart.
    #[must_use]
    pub fn read(&self) -> Vec<CartLine> {
        self.storage
            .as_deref()
            .map(load_lines)
            .unwrap_or_default()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<CartLine> {
        self.read()
            .into_iter()
            .find(|line| line.product_id() == product_id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.read().iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.read()
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Add `quantity` units of `product`.
    ///
    /// An existing line for the same product has its quantity increased and
    /// its product snapshot replaced by `product`; otherwise a new line is
    /// appended. The store does not check `product.stock`.
    ///
    /// A zero quantity is ignored.
    pub fn add_item(&self, product: &Product, quantity: u32) {
        if quantity == 0 {
            debug!(product_id = %product.id, "Ignoring add of zero units");
            return;
        }

        self.mutate("add_item", |lines| {
            match lines.iter_mut().find(|line| line.product_id() == product.id) {
                Some(line) => {
                    line.quantity = line.quantity.saturating_add(quantity);
                    line.product = product.clone();
                }
                None => lines.push(CartLine::new(product.clone(), quantity)),
            }
            true
        });
    }

    /// Set the quantity of the line for `product_id` to exactly `quantity`.
    ///
    /// Zero or negative removes the line. If no line matches, nothing is
    /// written and no notification is sent.
    pub fn update_quantity(&self, product_id: ProductId, quantity: i64) {
        self.mutate("update_quantity", |lines| {
            let Some(index) = lines
                .iter()
                .position(|line| line.product_id() == product_id)
            else {
                return false;
            };

            if quantity <= 0 {
                lines.remove(index);
            } else if let Some(line) = lines.get_mut(index) {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
            true
        });
    }

    /// Remove the line for `product_id`.
    ///
    /// The cart is rewritten and a notification sent even when no line
    /// matched, so a notification does not imply a change.
    pub fn remove_item(&self, product_id: ProductId) {
        self.mutate("remove_item", |lines| {
            lines.retain(|line| line.product_id() != product_id);
            true
        });
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.mutate("clear", |lines| {
            lines.clear();
            true
        });
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Call `handler` after every persisted cart mutation.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.broadcaster
            .subscribe(CART_CHANGE_TOPIC, Arc::new(handler))
    }

    /// Stop calling a handler registered with [`CartStore::subscribe`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.broadcaster.unsubscribe(id)
    }

    /// Read the snapshot, let `apply` edit it, persist and notify.
    ///
    /// `apply` returns whether the snapshot should be written. Notification
    /// happens only after a successful write and outside the write lock.
    fn mutate<F>(&self, operation: &'static str, apply: F)
    where
        F: FnOnce(&mut Vec<CartLine>) -> bool,
    {
        let Some(storage) = self.storage.as_deref() else {
            debug!(operation, "No cart storage available, ignoring mutation");
            return;
        };

        {
            let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

            let mut lines = load_lines(storage);
            if !apply(&mut lines) {
                debug!(operation, "Cart unchanged");
                return;
            }

            let payload = match serde_json::to_string(&lines) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!(operation, error = %e, "Failed to serialize cart");
                    return;
                }
            };

            if let Err(e) = storage.set(CART_STORAGE_KEY, &payload) {
                warn!(operation, error = %e, "Failed to persist cart");
                return;
            }

            debug!(operation, lines = lines.len(), "Cart persisted");
        }

        self.broadcaster.publish(CART_CHANGE_TOPIC);
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("has_storage", &self.has_storage())
            .finish_non_exhaustive()
    }
}

/// Load the cart snapshot from `storage`, treating every failure as empty.
fn load_lines<S: KeyValueStore + ?Sized>(storage: &S) -> Vec<CartLine> {
    match storage.get(CART_STORAGE_KEY) {
        Ok(Some(raw)) => decode_lines(&raw),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!(error = %e, "Failed to read stored cart, treating as empty");
            Vec::new()
        }
    }
}

/// Decode a stored snapshot.
///
/// The payload must be a JSON array; anything else is an empty cart. Entries
/// that are not valid lines or have a zero quantity are dropped, and repeated
/// product ids are merged into the first occurrence so a hand-edited snapshot
/// still yields one line per product.
fn decode_lines(raw: &str) -> Vec<CartLine> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "Stored cart is not a JSON array, treating as empty");
            return Vec::new();
        }
    };

    let mut lines: Vec<CartLine> = Vec::with_capacity(entries.len());
    for entry in entries {
        let line = match serde_json::from_value::<CartLine>(entry) {
            Ok(line) if line.quantity > 0 => line,
            Ok(line) => {
                debug!(product_id = %line.product_id(), "Dropping stored line with zero quantity");
                continue;
            }
            Err(e) => {
                warn!(error = %e, "Dropping unreadable stored cart line");
                continue;
            }
        };

        match lines
            .iter_mut()
            .find(|existing| existing.product_id() == line.product_id())
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => lines.push(line),
        }
    }
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::fixtures::product;
    use crate::storage::StorageError;

    fn store_over(storage: &MemoryStore) -> (CartStore, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let store = CartStore::new(Arc::new(storage.clone()), bus.clone());
        (store, bus)
    }

    fn counting(store: &CartStore) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        store.subscribe(move || {
            handle.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[test]
    fn test_read_empty_when_nothing_stored() {
        let store = CartStore::in_memory();
        assert!(store.read().is_empty());
        assert!(store.is_empty());
        assert_eq!(store.total(), Decimal::ZERO);
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_corrupt_snapshot_reads_as_empty() {
        for raw in ["", "   ", "{not json", "null", "{\"product\": 1}", "42"] {
            let storage = MemoryStore::with_entry(CART_STORAGE_KEY, raw);
            let (store, _) = store_over(&storage);
            assert!(store.read().is_empty(), "payload {raw:?}");
            assert_eq!(store.total(), Decimal::ZERO, "payload {raw:?}");
        }
    }

    #[test]
    fn test_invalid_entries_are_dropped() {
        let good = serde_json::to_value(CartLine::new(product(1, 1000, 5), 2)).unwrap();
        let zero = serde_json::to_value(CartLine::new(product(2, 500, 5), 0)).unwrap();
        let raw = serde_json::json!([good, zero, {"product": "oops", "quantity": 1}, {"quantity": -3}])
            .to_string();
        let storage = MemoryStore::with_entry(CART_STORAGE_KEY, &raw);
        let (store, _) = store_over(&storage);

        let lines = store.read();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_id(), ProductId::new(1));
    }

    #[test]
    fn test_duplicate_stored_entries_are_merged() {
        let a = serde_json::to_value(CartLine::new(product(1, 1000, 5), 2)).unwrap();
        let b = serde_json::to_value(CartLine::new(product(1, 1000, 5), 3)).unwrap();
        let raw = serde_json::json!([a, b]).to_string();
        let storage = MemoryStore::with_entry(CART_STORAGE_KEY, &raw);
        let (store, _) = store_over(&storage);

        let lines = store.read();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 5);
    }

    #[test]
    fn test_reads_snapshot_written_by_browser() {
        let raw = r#"[{"product":{"id":7,"name":"Clover Honey","description":"Light and sweet",
            "price":8.5,"stock":12,"image_url":null,"category":"classic",
            "created_at":"2024-03-02T10:00:00.000001"},"quantity":2}]"#;
        let storage = MemoryStore::with_entry(CART_STORAGE_KEY, raw);
        let (store, _) = store_over(&storage);

        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total(), Decimal::new(17, 0));
    }

    // =========================================================================
    // add_item
    // =========================================================================

    #[test]
    fn test_add_appends_in_order() {
        let store = CartStore::in_memory();
        store.add_item(&product(2, 500, 5), 1);
        store.add_item(&product(1, 1000, 5), 1);

        let ids: Vec<_> = store.read().iter().map(CartLine::product_id).collect();
        assert_eq!(ids, vec![ProductId::new(2), ProductId::new(1)]);
    }

    #[test]
    fn test_add_accumulates() {
        let store = CartStore::in_memory();
        let honey = product(1, 1000, 20);
        store.add_item(&honey, 2);
        store.add_item(&honey, 3);

        let lines = store.read();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 5);
    }

    #[test]
    fn test_add_refreshes_snapshot() {
        let store = CartStore::in_memory();
        store.add_item(&product(1, 1000, 20), 1);

        let mut repriced = product(1, 1200, 3);
        repriced.name = "Wildflower Honey (new label)".to_string();
        store.add_item(&repriced, 1);

        let line = store.line(ProductId::new(1)).unwrap();
        assert_eq!(line.product, repriced);
        assert_eq!(line.quantity, 2);
        assert_eq!(store.total(), Decimal::new(24, 0));
    }

    #[test]
    fn test_add_does_not_clamp_to_stock() {
        let store = CartStore::in_memory();
        store.add_item(&product(1, 1000, 2), 9);
        assert_eq!(store.item_count(), 9);
    }

    #[test]
    fn test_add_zero_is_ignored() {
        let store = CartStore::in_memory();
        let count = counting(&store);
        store.add_item(&product(1, 1000, 2), 0);

        assert!(store.is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_add_saturates() {
        let store = CartStore::in_memory();
        let honey = product(1, 1000, 2);
        store.add_item(&honey, u32::MAX);
        store.add_item(&honey, 5);
        assert_eq!(store.line(honey.id).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_product_ids_stay_unique() {
        let store = CartStore::in_memory();
        for (id, qty) in [(1, 1), (2, 2), (1, 3), (3, 1), (2, 1), (1, 1)] {
            store.add_item(&product(id, 100, 10), qty);
        }

        let lines = store.read();
        let ids: HashSet<_> = lines.iter().map(CartLine::product_id).collect();
        assert_eq!(ids.len(), lines.len());
        assert_eq!(lines.len(), 3);
        assert_eq!(store.item_count(), 9);
    }

    // =========================================================================
    // update_quantity / remove_item / clear
    // =========================================================================

    #[test]
    fn test_update_replaces_quantity() {
        let store = CartStore::in_memory();
        let honey = product(1, 1000, 20);
        store.add_item(&honey, 5);
        store.update_quantity(honey.id, 2);
        assert_eq!(store.line(honey.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        for quantity in [0, -1, i64::MIN] {
            let store = CartStore::in_memory();
            let honey = product(1, 1000, 20);
            store.add_item(&honey, 2);
            store.update_quantity(honey.id, quantity);
            assert!(store.line(honey.id).is_none(), "quantity {quantity}");
        }
    }

    #[test]
    fn test_update_saturates_large_quantity() {
        let store = CartStore::in_memory();
        let honey = product(1, 1000, 20);
        store.add_item(&honey, 1);
        store.update_quantity(honey.id, i64::MAX);
        assert_eq!(store.line(honey.id).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_update_missing_line_is_silent_noop() {
        let storage = MemoryStore::new();
        let (store, _) = store_over(&storage);
        let count = counting(&store);

        store.update_quantity(ProductId::new(99), 3);

        assert!(store.is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_remove_deletes_line() {
        let store = CartStore::in_memory();
        store.add_item(&product(1, 1000, 20), 1);
        store.add_item(&product(2, 500, 20), 1);
        store.remove_item(ProductId::new(1));

        let ids: Vec<_> = store.read().iter().map(CartLine::product_id).collect();
        assert_eq!(ids, vec![ProductId::new(2)]);
    }

    #[test]
    fn test_remove_missing_leaves_cart_but_still_notifies() {
        let store = CartStore::in_memory();
        store.add_item(&product(1, 1000, 20), 2);
        let before = store.read();
        let count = counting(&store);

        store.remove_item(ProductId::new(42));

        assert_eq!(store.read(), before);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_empties_and_persists_empty_array() {
        let storage = MemoryStore::new();
        let (store, _) = store_over(&storage);
        store.add_item(&product(1, 1000, 20), 2);

        store.clear();

        assert!(store.is_empty());
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    #[test]
    fn test_total_and_item_count() {
        let store = CartStore::in_memory();
        store.add_item(&product(1, 1000, 20), 2);
        store.add_item(&product(2, 500, 20), 3);

        assert_eq!(store.total(), Decimal::new(35, 0));
        assert_eq!(store.item_count(), 5);
    }

    #[test]
    fn test_total_is_exact_for_cents() {
        let store = CartStore::in_memory();
        store.add_item(&product(1, 10, 20), 3);
        store.add_item(&product(2, 20, 20), 1);
        assert_eq!(store.total(), Decimal::new(50, 2));
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    #[test]
    fn test_fresh_store_sees_persisted_cart() {
        let storage = MemoryStore::new();
        let (store, _) = store_over(&storage);
        store.add_item(&product(1, 1299, 20), 2);
        store.add_item(&product(2, 850, 20), 1);
        store.update_quantity(ProductId::new(2), 4);

        let (fresh, _) = store_over(&storage);
        assert_eq!(
            fresh.read(),
            vec![
                CartLine::new(product(1, 1299, 20), 2),
                CartLine::new(product(2, 850, 20), 4),
            ]
        );
        assert_eq!(fresh.total(), Decimal::new(5998, 2));
    }

    #[test]
    fn test_persisted_prices_and_timestamps_are_exact() {
        let storage = MemoryStore::new();
        let (store, _) = store_over(&storage);
        let added_at = chrono::Utc::now();
        let products: Vec<Product> = [
            Decimal::new(1299, 2),
            Decimal::new(1999, 2),
            Decimal::new(33, 2),
            Decimal::new(7, 2),
            Decimal::new(99_999_999, 2),
            Decimal::new(1_234_567, 3),
        ]
        .into_iter()
        .zip(1..)
        .map(|(price, id)| Product {
            price,
            created_at: added_at,
            ..product(id, 0, 20)
        })
        .collect();
        for (quantity, honey) in (1..).zip(&products) {
            store.add_item(honey, quantity);
        }

        let (fresh, _) = store_over(&storage);
        let expected: Vec<CartLine> = (1..)
            .zip(products)
            .map(|(quantity, honey)| CartLine::new(honey, quantity))
            .collect();
        assert_eq!(fresh.read(), expected);
    }

    #[test]
    fn test_snapshot_is_json_array_of_lines() {
        let storage = MemoryStore::new();
        let (store, _) = store_over(&storage);
        store.add_item(&product(1, 1000, 20), 2);

        let raw = storage.get(CART_STORAGE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["quantity"], 2);
        assert_eq!(json[0]["product"]["id"], 1);
        assert!(json[0]["product"]["price"].is_number());
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    #[test]
    fn test_notifies_once_per_effective_mutator() {
        let store = CartStore::in_memory();
        let count = counting(&store);
        let honey = product(1, 1000, 20);

        store.add_item(&honey, 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        store.update_quantity(honey.id, 4);
        assert_eq!(count.load(Ordering::SeqCst), 2);

        store.update_quantity(ProductId::new(404), 4);
        assert_eq!(count.load(Ordering::SeqCst), 2);

        store.remove_item(ProductId::new(404));
        assert_eq!(count.load(Ordering::SeqCst), 3);

        store.clear();
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_subscriber_observes_state_of_its_mutation() {
        let store = Arc::new(CartStore::in_memory());
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let reader = Arc::clone(&store);
            let seen = Arc::clone(&seen);
            store.subscribe(move || seen.lock().unwrap().push(reader.item_count()));
        }
        let honey = product(1, 1000, 20);

        store.add_item(&honey, 2);
        store.add_item(&honey, 1);
        store.update_quantity(honey.id, 7);
        store.clear();

        assert_eq!(*seen.lock().unwrap(), vec![2, 3, 7, 0]);
    }

    #[test]
    fn test_subscriber_may_mutate_during_notification() {
        let store = Arc::new(CartStore::in_memory());
        let honey = product(1, 1000, 20);
        {
            let writer = Arc::clone(&store);
            let honey = honey.clone();
            store.subscribe(move || {
                if writer.item_count() > 3 {
                    writer.update_quantity(honey.id, 3);
                }
            });
        }

        store.add_item(&honey, 5);

        assert_eq!(store.item_count(), 3);
    }

    #[test]
    fn test_unsubscribed_handler_not_called() {
        let store = CartStore::in_memory();
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        let id = store.subscribe(move || {
            handle.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.unsubscribe(id));
        store.clear();

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    // =========================================================================
    // Degraded storage
    // =========================================================================

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_owned()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Poisoned)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Ok(())
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_does_not_notify() {
        let store = CartStore::new(Arc::new(ReadOnlyStore), Arc::new(EventBus::new()));
        let count = counting(&store);

        store.add_item(&product(1, 1000, 20), 1);

        assert!(store.is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unreadable_storage_reads_as_empty() {
        let store = CartStore::new(Arc::new(UnreadableStore), Arc::new(EventBus::new()));
        assert!(store.read().is_empty());
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_detached_store_ignores_mutations() {
        let store = CartStore::detached(Arc::new(EventBus::new()));
        let count = counting(&store);

        store.add_item(&product(1, 1000, 20), 1);
        store.remove_item(ProductId::new(1));
        store.clear();

        assert!(!store.has_storage());
        assert!(store.read().is_empty());
        assert_eq!(store.total(), Decimal::ZERO);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
