//! Application state snapshot

use serde::{Deserialize, Serialize};

use crate::route::{RouteEntry, RouteStack};
use crate::waiting::WaitingState;

/// Everything the store owns.
///
/// Bindings receive `&AppState` and never mutate it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// In-flight operation counters
    pub waiting: WaitingState,
    /// Navigation stack
    pub routes: RouteStack,
}

impl AppState {
    /// Create state with the default root route
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with `entry` pushed on top of the default root
    pub fn with_route(entry: RouteEntry) -> Self {
        let mut state = Self::default();
        state.routes.navigate_append(entry);
        state
    }

    /// Render the state as JSON for trace logs
    #[cfg(feature = "debug-serialize")]
    pub fn debug_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }
}
