//! # Delete Confirmation View
//!
//! Bordered dialog asking whether to delete a path. Enter or `y` confirm
//! through a [`SafeSubmit`] guard watching `deleting`, so a held key cannot
//! dispatch the delete twice and nothing is dispatched while a delete of
//! the path is in flight. Esc or `n` call `on_back`, which the binding makes
//! a no-op while deleting.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use cinder_app::{DeleteConfirmationProps, SafeSubmit};

use super::{Component, InputAction, Styles};

/// Label shown instead of the key hints while deleting
pub const DELETING_LABEL: &str = "Deleting...";

const KEY_HINTS: &str = "[Enter] Delete   [Esc] Cancel";

/// View for the delete confirmation screen
#[derive(Debug, Clone)]
pub struct DeleteConfirmationView {
    props: DeleteConfirmationProps,
    guard: SafeSubmit,
}

impl DeleteConfirmationView {
    /// Create a view for freshly derived props
    pub fn new(props: DeleteConfirmationProps) -> Self {
        let mut guard = SafeSubmit::new();
        guard.observe(props.deleting);
        Self { props, guard }
    }

    /// Replace the props after a store update
    pub fn update(&mut self, props: DeleteConfirmationProps) {
        self.guard.observe(props.deleting);
        self.props = props;
    }

    /// Props currently shown
    pub fn props(&self) -> &DeleteConfirmationProps {
        &self.props
    }

    /// Check if a confirm key would dispatch
    pub fn can_submit(&self) -> bool {
        self.guard.is_armed()
    }

    fn question(&self, styles: &Styles) -> Line<'_> {
        let name = self.props.path.name().unwrap_or(self.props.path.as_str());
        Line::from(vec![
            Span::styled("Permanently delete ", styles.danger()),
            Span::styled(name, styles.danger()),
            Span::styled("?", styles.danger()),
        ])
    }
}

impl Component for DeleteConfirmationView {
    fn handle_key(&mut self, key: KeyEvent) -> Option<InputAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                if self.guard.submit(&self.props.on_delete) {
                    Some(InputAction::Submitted)
                } else {
                    Some(InputAction::None)
                }
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                if self.props.on_back.is_noop() {
                    tracing::debug!(path = %self.props.path, "Back ignored while deleting");
                    return Some(InputAction::None);
                }
                self.props.on_back.call();
                Some(InputAction::Back)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let status = if self.props.deleting {
            Line::from(Span::styled(DELETING_LABEL, styles.pending()))
        } else {
            Line::from(Span::styled(KEY_HINTS, styles.text_muted()))
        };

        let lines = vec![
            self.question(styles),
            Line::from(Span::styled(self.props.path.as_str(), styles.text_muted())),
            Line::default(),
            Line::from(Span::styled("This cannot be undone.", styles.text())),
            Line::default(),
            status,
        ];

        let dialog = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles.border())
                    .title(Span::styled(self.props.title.as_str(), styles.title())),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(dialog, area);
    }

    fn min_size(&self) -> (u16, u16) {
        (40, 8)
    }
}
