//! Observable recipe store with automatic change notifications.
//!
//! Mutation = notification. Every method that changes the store also
//! delivers the complete new snapshot to subscribers. Callers cannot mutate
//! without notifying.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::sync::watch;

use pantry_core::{Item, ItemId};

use crate::subscription::{SubscriberFn, SubscriberList, Subscription};

/// Complete, consistent view of the store contents.
pub type Snapshot = Arc<[Item]>;

/// The item store the recipe list binds to.
pub trait ItemStore: Send + Sync {
    /// Current contents, in insertion order.
    fn snapshot(&self) -> Snapshot;

    /// Add an item and return its canonical stored form.
    ///
    /// The store may assign a fresh id.
    fn add(&self, item: Item) -> Item;

    /// Delete an item. Returns `false` if there was nothing to delete.
    fn delete(&self, id: &ItemId) -> bool;

    /// Receive every snapshot, starting with the current one.
    fn subscribe(&self, callback: SubscriberFn) -> Subscription;
}

// =============================================================================
// RecipeStore
// =============================================================================

/// An in-memory store that broadcasts every change.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the items (never poisons). A delivery lock
/// is held from mutation through notification, so snapshots reach each
/// subscriber in one total order even when several threads mutate.
///
/// Callbacks run on the mutating thread and must not mutate this store.
///
/// ## Usage
///
/// ```ignore
/// let store = RecipeStore::new();
/// let sub = store.subscribe(Box::new(|items| println!("{} recipes", items.len())));
///
/// // This adds AND notifies
/// store.add(Item::new("Pancakes"));
///
/// sub.cancel();
/// ```
pub struct RecipeStore {
    inner: RwLock<Vec<Item>>,
    delivery: Mutex<()>,
    subscribers: SubscriberList,
    tx: watch::Sender<Snapshot>,
    rx: watch::Receiver<Snapshot>,
}

impl RecipeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a store holding `items`.
    ///
    /// Items with a nil or repeated id get a fresh one.
    pub fn with_items(items: Vec<Item>) -> Self {
        let mut canonical: Vec<Item> = Vec::with_capacity(items.len());
        for item in items {
            let item = Self::canonicalize(&canonical, item);
            canonical.push(item);
        }

        let (tx, rx) = watch::channel(Snapshot::from(canonical.clone()));
        Self {
            inner: RwLock::new(canonical),
            delivery: Mutex::new(()),
            subscribers: SubscriberList::default(),
            tx,
            rx,
        }
    }

    // =========================================================================
    // Mutation Methods (all notify automatically)
    // =========================================================================

    /// Modify an item in place and notify.
    ///
    /// The item keeps its id whatever the closure does.
    /// Returns `false` if no item has that id.
    pub fn update<F>(&self, id: &ItemId, f: F) -> bool
    where
        F: FnOnce(&mut Item),
    {
        let _delivery = self.delivery.lock();
        let snapshot = {
            let mut inner = self.inner.write();
            match inner.iter_mut().find(|item| item.id == *id) {
                Some(item) => {
                    f(item);
                    item.id = *id;
                    tracing::debug!("Updated item {}", id);
                }
                None => {
                    tracing::debug!("Cannot update: no item {}", id);
                    return false;
                }
            }
            Snapshot::from(inner.as_slice())
        };
        self.emit(snapshot);
        true
    }

    /// Remove every item and notify.
    ///
    /// Returns the removed items.
    pub fn clear(&self) -> Vec<Item> {
        let _delivery = self.delivery.lock();
        let old = {
            let mut inner = self.inner.write();
            std::mem::take(&mut *inner)
        };
        tracing::debug!("Cleared {} items", old.len());
        self.emit(Snapshot::from(Vec::new()));
        old
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    /// Get an item by id.
    pub fn get(&self, id: &ItemId) -> Option<Item> {
        self.inner.read().iter().find(|item| item.id == *id).cloned()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Number of live callback subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Watch the latest snapshot.
    ///
    /// The receiver sees the current snapshot immediately and every later
    /// one. Intermediate snapshots may be skipped by slow receivers; use
    /// [`ItemStore::subscribe`] to see every emission.
    pub fn watch(&self) -> watch::Receiver<Snapshot> {
        self.rx.clone()
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Assign a fresh id if `item` has a nil id or collides with `existing`.
    fn canonicalize(existing: &[Item], mut item: Item) -> Item {
        if item.id.is_nil() || existing.iter().any(|other| other.id == item.id) {
            item.id = ItemId::new();
        }
        item
    }

    /// Deliver a snapshot. Caller holds the delivery lock.
    fn emit(&self, snapshot: Snapshot) {
        self.subscribers.notify(&snapshot);
        let _ = self.tx.send(snapshot);
    }
}

impl ItemStore for RecipeStore {
    fn snapshot(&self) -> Snapshot {
        Snapshot::from(self.inner.read().as_slice())
    }

    fn add(&self, item: Item) -> Item {
        let _delivery = self.delivery.lock();
        let (stored, snapshot) = {
            let mut inner = self.inner.write();
            let stored = Self::canonicalize(&inner, item);
            inner.push(stored.clone());
            tracing::debug!("Added item {}, count: {}", stored.id, inner.len());
            (stored, Snapshot::from(inner.as_slice()))
        };
        self.emit(snapshot);
        stored
    }

    fn delete(&self, id: &ItemId) -> bool {
        let _delivery = self.delivery.lock();
        let snapshot = {
            let mut inner = self.inner.write();
            let Some(position) = inner.iter().position(|item| item.id == *id) else {
                tracing::debug!("Cannot delete: no item {}", id);
                return false;
            };
            inner.remove(position);
            tracing::debug!("Deleted item {}, count: {}", id, inner.len());
            Snapshot::from(inner.as_slice())
        };
        self.emit(snapshot);
        true
    }

    fn subscribe(&self, callback: SubscriberFn) -> Subscription {
        let _delivery = self.delivery.lock();
        let snapshot = self.snapshot();
        self.subscribers.subscribe(callback, &snapshot)
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
