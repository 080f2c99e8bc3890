//! # Cinder App Core
//!
//! Portable headless core shared by every Cinder frontend.
//!
//! ## Flow
//!
//! ```text
//! Intent → Store::dispatch → reduce(AppState) → listeners → Binding::derive → Props
//! ```
//!
//! Frontends never read the store from presentational code. They hold a
//! [`Store`], derive flat props values through a [`Binding`], and hand
//! those props to their widgets.
//!
//! ## Modules
//!
//! - [`core`]: intents, the reducer and the store
//! - [`fs`]: file-system path identifiers
//! - [`waiting`]: in-flight operation tracking keyed by [`WaitingKey`]
//! - [`route`]: route parameter bags and the navigation stack
//! - [`ui`]: bindings, callbacks and leaf-screen view models
//! - [`config`]: TOML configuration
//! - [`errors`]: the crate error type

pub mod config;
pub mod core;
pub mod errors;
pub mod fs;
pub mod route;
pub mod ui;
pub mod waiting;

pub use crate::config::{AppConfig, Platform, DEFAULT_LOG_LEVEL};
pub use crate::core::{
    reduce, AppState, Dispatch, Dispatcher, FsIntent, Intent, ListenerId, RouteIntent, Store,
    StoreListener, WaitingIntent,
};
pub use crate::errors::AppError;
pub use crate::fs::{FsPath, Visibility};
pub use crate::route::{RouteEntry, RouteName, RouteProps, RouteStack};
pub use crate::ui::{
    error_panel_layout, Binding, Callback, ConversationErrorBinding, ConversationErrorProps,
    ConversationErrorScreenProps, DeleteConfirmationBinding, DeleteConfirmationProps,
    ErrorPanelLayout, PanelChrome, SafeSubmit, DELETE_CONFIRMATION_TITLE,
};
pub use crate::waiting::{any_waiting, delete_folder_waiting_key, WaitingKey, WaitingState};
