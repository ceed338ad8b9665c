//! Callback subscriptions.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

use pantry_core::Item;

/// Callback invoked with each complete snapshot of the store.
pub type SubscriberFn = Box<dyn FnMut(&[Item]) + Send>;

type SharedSubscriber = Arc<Mutex<SubscriberFn>>;

/// Registered callbacks, in subscription order.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(u64, SharedSubscriber)>,
}

impl Subscribers {
    fn insert(&mut self, callback: SubscriberFn) -> (u64, SharedSubscriber) {
        self.next_id += 1;
        let id = self.next_id;
        let shared = Arc::new(Mutex::new(callback));
        self.entries.push((id, shared.clone()));
        (id, shared)
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Shared list of subscribers.
///
/// Delivery clones the callback handles out of the list before calling them,
/// so callbacks may subscribe or cancel without deadlocking.
#[derive(Clone, Default)]
pub(crate) struct SubscriberList {
    inner: Arc<Mutex<Subscribers>>,
}

impl SubscriberList {
    /// Register a callback and deliver `initial` to it.
    pub(crate) fn subscribe(&self, callback: SubscriberFn, initial: &[Item]) -> Subscription {
        let (id, shared) = self.inner.lock().insert(callback);
        {
            let mut callback = shared.lock();
            (*callback)(initial);
        }
        Subscription {
            id,
            list: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `items` to every subscriber, in subscription order.
    pub(crate) fn notify(&self, items: &[Item]) {
        let targets: Vec<SharedSubscriber> = self
            .inner
            .lock()
            .entries
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        for shared in targets {
            let mut callback = shared.lock();
            (*callback)(items);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.lock().len()
    }
}

/// Handle to a store subscription.
///
/// Call [`Subscription::cancel`] to stop receiving snapshots. Dropping the
/// handle cancels as well.
#[must_use = "dropping a Subscription cancels it"]
pub struct Subscription {
    id: u64,
    list: Weak<Mutex<Subscribers>>,
}

impl Subscription {
    /// Stop receiving snapshots.
    pub fn cancel(self) {
        // Drop does the work.
    }

    /// Check if the subscription is still registered with a live store.
    pub fn is_active(&self) -> bool {
        self.list
            .upgrade()
            .map(|list| list.lock().entries.iter().any(|(id, _)| *id == self.id))
            .unwrap_or(false)
    }

    fn detach(&self) {
        if let Some(list) = self.list.upgrade() {
            if list.lock().remove(self.id) {
                tracing::debug!("Subscription {} cancelled", self.id);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
