//! # Cinder Terminal
//!
//! Terminal frontend for the Cinder leaf screens, built on ratatui and
//! crossterm.
//!
//! ## Modules
//!
//! - [`app`]: event loop binding one screen to the store
//! - [`components`]: presentational views and the [`Component`] trait
//! - [`snapshot`]: headless rendering through `TestBackend`
//! - [`cli`]: clap definitions for the `cinder` binary
//! - [`logging`]: tracing subscriber setup
//! - [`styles`]: palette and named styles

pub mod app;
pub mod cli;
pub mod components;
pub mod error;
pub mod logging;
pub mod snapshot;
pub mod styles;

pub use app::{run_interactive, App, ScreenView};
pub use components::{Component, DeleteConfirmationView, ErrorPanelView, InputAction};
pub use error::TerminalError;
pub use styles::{ColorPalette, Styles};
