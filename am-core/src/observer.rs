//! Listener lists for the stores
//!
//! Plain synchronous fan-out: listeners run on the mutating thread, in
//! subscription order, after the mutation has been applied.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Ordered set of listeners for snapshots of type `T`
pub struct Listeners<T> {
    next_id: AtomicU64,
    entries: RwLock<Vec<(ListenerId, Listener<T>)>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Add a listener at the end of the notification order
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries.write().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    /// Call every listener with `value`
    ///
    /// The list is cloned first so listeners may subscribe or unsubscribe
    /// without deadlocking.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self
            .entries
            .read()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}
