//! # Bindings
//!
//! A binding maps a state snapshot, the route parameters of the screen and a
//! dispatch capability to one flat props value. Presentational code receives
//! only that value and never looks anything up in the store.
//!
//! ```text
//! (&AppState, &RouteProps, &Dispatcher) → Binding::derive_props → Props
//! ```
//!
//! Derivation is synchronous and side-effect free; side effects happen only
//! when a callback inside the returned props is invoked.

use crate::core::{AppState, Dispatcher};
use crate::errors::AppError;
use crate::route::RouteProps;

/// State-to-props connector for one screen
pub trait Binding {
    /// Fully resolved props handed to the presentational component
    type Props;

    /// Derive props for the screen showing `route`
    fn derive_props(
        &self,
        state: &AppState,
        route: &RouteProps,
        dispatcher: &Dispatcher,
    ) -> Result<Self::Props, AppError>;
}
