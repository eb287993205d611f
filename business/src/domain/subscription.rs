use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Callback invoked with every published value.
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

type Listeners<T> = Mutex<BTreeMap<u64, Listener<T>>>;

/// Source of values that collaborators can listen to.
pub trait Subscribable<T>: Send + Sync {
    fn subscribe(&self, listener: Listener<T>) -> Subscription;
}

/// Active registration of a listener.
///
/// The listener is removed when `unsubscribe` is called or the subscription
/// is dropped.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// In-memory fan-out of values to registered listeners.
pub struct SubscriptionHub<T> {
    listeners: Arc<Listeners<T>>,
    next_id: AtomicU64,
}

impl<T> SubscriptionHub<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: AtomicU64::new(0),
        }
    }

    /// Delivers `value` to every listener registered at the time of the call.
    pub fn publish(&self, value: &T) {
        // Listeners run outside the lock so they may subscribe or unsubscribe.
        let listeners: Vec<Listener<T>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();

        for listener in listeners {
            listener(value);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<T> Default for SubscriptionHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Subscribable<T> for SubscriptionHub<T> {
    fn subscribe(&self, listener: Listener<T>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, listener);

        let listeners: Weak<Listeners<T>> = Arc::downgrade(&self.listeners);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(listeners) = listeners.upgrade() {
                    listeners
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .remove(&id);
                }
            })),
        }
    }
}
