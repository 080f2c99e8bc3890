//! # Store
//!
//! Owns [`AppState`], reduces dispatched intents and notifies listeners.
//!
//! Listeners run after the write lock is released, so a listener may read
//! the store or dispatch follow-up intents without deadlocking.

use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::intent::Intent;
use super::reducer::reduce;
use super::state::AppState;

/// Capability to dispatch intents.
///
/// Bindings receive this instead of the store so tests can substitute a
/// recording fake.
pub trait Dispatch: Send + Sync {
    /// Dispatch one intent. Fire-and-forget.
    fn dispatch(&self, intent: Intent);
}

/// Shared dispatch handle
pub type Dispatcher = Arc<dyn Dispatch>;

/// Called after every dispatch with the intent and the resulting state
pub type StoreListener = Arc<dyn Fn(&Intent, &AppState) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Central application state store
pub struct Store {
    state: RwLock<AppState>,
    listeners: Mutex<Vec<(ListenerId, StoreListener)>>,
    next_listener: AtomicU64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    /// Create a store holding `initial`
    pub fn new(initial: AppState) -> Self {
        Self {
            state: RwLock::new(initial),
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(0),
        }
    }

    /// Create a shared store
    pub fn shared(initial: AppState) -> Arc<Self> {
        Arc::new(Self::new(initial))
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// Run `f` against the current state without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&*self.state.read())
    }

    /// Register a listener for every subsequent dispatch
    pub fn subscribe(&self, listener: StoreListener) -> ListenerId {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, listener));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    ///
    /// A dispatch already in progress may still call it once.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, intent: Intent) {
        tracing::debug!(intent = intent.label(), "dispatch");

        let snapshot = {
            let mut state = self.state.write();
            reduce(&mut state, &intent);
            state.clone()
        };

        #[cfg(feature = "debug-serialize")]
        tracing::trace!(state = %snapshot.debug_json(), "state after reduce");

        let listeners: Vec<StoreListener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in &listeners {
            listener(&intent, &snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intent::RouteIntent;
    use crate::fs::FsPath;
    use crate::route::{RouteEntry, RouteName};

    fn doc() -> FsPath {
        FsPath::parse("/keybase/private/alice/doc.txt").expect("valid path")
    }

    #[test]
    fn test_dispatch_reduces_state() {
        let store = Store::new(AppState::with_route(RouteEntry::really_delete(&doc())));
        store.dispatch(Intent::navigate_up());
        assert_eq!(store.read(|s| s.routes.current().name), RouteName::Files);
    }

    #[test]
    fn test_listeners_see_every_intent_in_order() {
        let store = Store::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(Arc::new(move |intent: &Intent, _state: &AppState| {
            sink.lock().push(intent.clone());
        }));

        store.dispatch(Intent::delete_file(doc()));
        store.dispatch(Intent::navigate_up());

        assert_eq!(
            *seen.lock(),
            vec![Intent::delete_file(doc()), Intent::navigate_up()]
        );
    }

    #[test]
    fn test_listener_receives_post_reduce_state() {
        let store = Store::new(AppState::with_route(RouteEntry::really_delete(&doc())));
        let depths = Arc::new(Mutex::new(Vec::new()));
        let sink = depths.clone();
        store.subscribe(Arc::new(move |_intent: &Intent, state: &AppState| {
            sink.lock().push(state.routes.depth());
        }));

        store.dispatch(Intent::navigate_up());
        assert_eq!(*depths.lock(), vec![1]);
    }

    #[test]
    fn test_listener_may_dispatch() {
        let store = Arc::new(Store::new(AppState::new()));
        let weak = Arc::downgrade(&store);
        store.subscribe(Arc::new(move |intent: &Intent, _state: &AppState| {
            if let Intent::Route(RouteIntent::NavigateAppend(_)) = intent {
                if let Some(store) = weak.upgrade() {
                    store.dispatch(Intent::navigate_up());
                }
            }
        }));

        store.dispatch(Intent::navigate_append(RouteEntry::really_delete(&doc())));
        assert!(store.read(|s| s.routes.at_root()));
    }

    #[test]
    fn test_unsubscribed_listener_is_not_called() {
        let store = Store::default();
        let hits = Arc::new(Mutex::new(0));
        let sink = hits.clone();
        let id = store.subscribe(Arc::new(move |_intent: &Intent, _state: &AppState| {
            *sink.lock() += 1;
        }));
        let other = store.subscribe(Arc::new(|_intent: &Intent, _state: &AppState| {}));

        store.dispatch(Intent::navigate_up());
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Intent::navigate_up());

        assert_eq!(*hits.lock(), 1);
        assert_eq!(store.listener_count(), 1);
        assert_ne!(id, other);
    }
}
