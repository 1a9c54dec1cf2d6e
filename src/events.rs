//! Page Event Bus
//!
//! Typed publish/subscribe shared by the widgets of one page. Handed out
//! through the Leptos context instead of dispatching on `window`.
//!
//! Delivery is synchronous and in registration order. Nothing is retained:
//! a listener registered after a publish, or while it is being delivered,
//! does not see that event.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::ResourceKind;

/// Broadcast after the server confirmed a deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionNotice {
    pub resource_name: String,
    pub resource_type: ResourceKind,
}

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Listeners<E> {
    next_id: u64,
    entries: Vec<(u64, Listener<E>)>,
}

pub struct EventBus<E> {
    inner: Arc<Mutex<Listeners<E>>>,
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<E: 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> EventBus<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Listeners { next_id: 0, entries: Vec::new() })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Listeners<E>> {
        // Listeners run outside the lock, so a poisoned lock holds consistent data
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn subscribe(&self, listener: impl Fn(&E) + Send + Sync + 'static) -> Subscription {
        let listener: Listener<E> = Arc::new(listener);
        let mut listeners = self.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, listener));
        Subscription(id)
    }

    /// Returns `false` if the subscription was already gone
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.lock();
        let before = listeners.entries.len();
        listeners.entries.retain(|(id, _)| *id != subscription.0);
        listeners.entries.len() != before
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.lock().entries.len()
    }

    /// Deliver `event` to every current listener; returns how many were called
    pub fn publish(&self, event: &E) -> usize {
        // Snapshot so listeners may (un)subscribe while being called
        let snapshot: Vec<Listener<E>> = self.lock().entries.iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }
}
