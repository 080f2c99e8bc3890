//! # State Reducer
//!
//! Applies intents to [`AppState`]. Pure: no I/O, no logging side channels
//! beyond tracing.
//!
//! File-system intents are not reduced here. Deleting a path is the
//! file-system service's job, and that service reports progress back through
//! waiting intents.

use super::intent::{Intent, RouteIntent, WaitingIntent};
use super::state::AppState;

/// Apply `intent` to `state`
pub fn reduce(state: &mut AppState, intent: &Intent) {
    match intent {
        Intent::Route(RouteIntent::NavigateUp) => {
            if !state.routes.navigate_up() {
                tracing::debug!("navigate_up at root ignored");
            }
        }
        Intent::Route(RouteIntent::NavigateAppend(entry)) => {
            state.routes.navigate_append(entry.clone());
        }
        Intent::Waiting(WaitingIntent::Increment { key }) => state.waiting.increment(key),
        Intent::Waiting(WaitingIntent::Decrement { key, error }) => {
            state.waiting.decrement(key, error.clone());
        }
        Intent::Waiting(WaitingIntent::Clear { key }) => state.waiting.clear(key),
        Intent::Fs(_) => {}
    }
}
