//! Recording dispatcher
//!
//! Stands in for the store wherever a binding needs a [`Dispatcher`]. It
//! reduces nothing; it only remembers what was dispatched, in order.

use cinder_app::{Dispatch, Dispatcher, Intent};
use parking_lot::Mutex;
use std::sync::Arc;

/// Fake dispatcher that records every intent
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    intents: Mutex<Vec<Intent>>,
}

impl RecordingDispatcher {
    /// Create a shared recorder
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Type-erased handle to pass into bindings
    pub fn handle(self: &Arc<Self>) -> Dispatcher {
        self.clone()
    }

    /// Intents dispatched so far
    pub fn intents(&self) -> Vec<Intent> {
        self.intents.lock().clone()
    }

    /// Remove and return the intents dispatched so far
    pub fn take(&self) -> Vec<Intent> {
        std::mem::take(&mut *self.intents.lock())
    }

    /// Number of intents dispatched so far
    pub fn len(&self) -> usize {
        self.intents.lock().len()
    }

    /// Check if nothing was dispatched
    pub fn is_empty(&self) -> bool {
        self.intents.lock().is_empty()
    }
}

impl Dispatch for RecordingDispatcher {
    fn dispatch(&self, intent: Intent) {
        self.intents.lock().push(intent);
    }
}
