//! # Screen Components
//!
//! Presentational views for the leaf screens. A view owns the props most
//! recently derived for it and nothing else; it never reads the store.
//! Key handling invokes the callbacks carried by the props.

mod delete_confirmation;
mod error_panel;
mod header;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub use crate::styles::Styles;
pub use delete_confirmation::{DeleteConfirmationView, DELETING_LABEL};
pub use error_panel::ErrorPanelView;
pub use header::NavHeader;

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// The key was consumed without effect
    None,
    /// The screen's submit callback ran
    Submitted,
    /// The screen's back callback ran
    Back,
}

/// A screen that can be drawn and can react to keys
pub trait Component {
    /// Handle a key press. `None` means the key was not consumed.
    fn handle_key(&mut self, key: KeyEvent) -> Option<InputAction>;

    /// Draw into `area`. Rendering has no side effects.
    fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles);

    /// Smallest area the component can draw into, as (width, height)
    fn min_size(&self) -> (u16, u16) {
        (20, 5)
    }
}
