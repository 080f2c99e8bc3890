//! # Core Application Module
//!
//! - [`Intent`]: user actions dispatched to the store
//! - [`AppState`]: the state snapshot bindings read from
//! - [`reduce`]: pure state transitions
//! - [`Store`]: owns state, reduces intents, notifies listeners
//! - [`Dispatch`]: the injected dispatch capability

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::{FsIntent, Intent, RouteIntent, WaitingIntent};
pub use reducer::reduce;
pub use state::AppState;
pub use store::{Dispatch, Dispatcher, ListenerId, Store, StoreListener};
