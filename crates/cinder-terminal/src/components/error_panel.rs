//! # Conversation Error Panel View
//!
//! Header, explanatory line and a bordered box holding the error text. On
//! header-wrapped chrome a navigation header sits above the panel and Esc
//! triggers its back action; bare chrome leaves Esc to the caller.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use cinder_app::{error_panel_layout, ConversationErrorScreenProps, ErrorPanelLayout, PanelChrome};

use super::{Component, InputAction, NavHeader, Styles};

/// View for the conversation error screen
#[derive(Debug, Clone)]
pub struct ErrorPanelView {
    props: ConversationErrorScreenProps,
    chrome: PanelChrome,
}

impl ErrorPanelView {
    /// Create a view with fixed `chrome`
    pub fn new(props: ConversationErrorScreenProps, chrome: PanelChrome) -> Self {
        Self { props, chrome }
    }

    /// Replace the props after a store update
    pub fn update(&mut self, props: ConversationErrorScreenProps) {
        self.props = props;
    }

    /// Chrome chosen at construction
    pub fn chrome(&self) -> &PanelChrome {
        &self.chrome
    }

    /// Layout of the current props
    pub fn layout(&self) -> ErrorPanelLayout {
        error_panel_layout(&self.props.panel)
    }

    fn render_panel(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let layout = self.layout();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Span::styled(layout.header, styles.title())),
            rows[0],
        );
        f.render_widget(
            Paragraph::new(Span::styled(layout.body, styles.text())),
            rows[2],
        );

        let error_box = Paragraph::new(Span::styled(layout.error_text, styles.text_error()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles.border()),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(error_box, rows[3]);
    }
}

impl Component for ErrorPanelView {
    fn handle_key(&mut self, key: KeyEvent) -> Option<InputAction> {
        match (&self.chrome, key.code) {
            (PanelChrome::HeaderWrapped { .. }, KeyCode::Esc) => {
                self.props.on_back.call();
                Some(InputAction::Back)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        match &self.chrome {
            PanelChrome::Bare => self.render_panel(f, area, styles),
            PanelChrome::HeaderWrapped { title } => {
                let split = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(0)])
                    .split(area);
                NavHeader::new(title.as_str()).render(f, split[0], styles);
                self.render_panel(f, split[1], styles);
            }
        }
    }

    fn min_size(&self) -> (u16, u16) {
        let header = u16::from(self.chrome.has_header());
        (48, 8 + header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinder_app::{Callback, ConversationErrorProps, Platform};
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn props(text: &str) -> (ConversationErrorScreenProps, Arc<AtomicUsize>) {
        let backs = Arc::new(AtomicUsize::new(0));
        let counter = backs.clone();
        let props = ConversationErrorScreenProps {
            panel: ConversationErrorProps::new(text),
            on_back: Callback::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        };
        (props, backs)
    }

    fn draw(view: &ErrorPanelView) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| view.render(f, f.size(), &Styles::default()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer.get(x, y).symbol())
            .collect()
    }

    fn text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| row(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_bare_panel_shows_all_three_parts() {
        let (props, _) = props("network timeout");
        let view = ErrorPanelView::new(props, PanelChrome::Bare);
        let screen = text(&draw(&view));

        assert!(screen.contains("There was an error loading this conversation."));
        assert!(screen.contains("The error is:"));
        assert!(screen.contains("network timeout"));
        assert!(!screen.contains("< Back"));
    }

    #[test]
    fn test_header_chrome_draws_header_first() {
        let (props, _) = props("boom");
        let view = ErrorPanelView::new(props, PanelChrome::for_platform(Platform::Mobile));
        let buffer = draw(&view);

        assert!(row(&buffer, 0).starts_with("< Back  Conversation Error"));
        assert!(text(&buffer).contains("boom"));
    }

    #[test]
    fn test_render_is_pure() {
        let (props, backs) = props("same input");
        let view = ErrorPanelView::new(props, PanelChrome::Bare);
        assert_eq!(draw(&view), draw(&view));
        assert_eq!(backs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_esc_goes_back_only_with_header() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

        let (bare_props, backs) = props("x");
        let mut bare = ErrorPanelView::new(bare_props, PanelChrome::Bare);
        assert_eq!(bare.handle_key(esc), None);
        assert_eq!(backs.load(Ordering::SeqCst), 0);

        let (props, backs) = props("x");
        let mut wrapped = ErrorPanelView::new(props, PanelChrome::for_platform(Platform::Mobile));
        assert_eq!(wrapped.handle_key(esc), Some(InputAction::Back));
        assert_eq!(backs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_error_text_still_renders_panel() {
        let (props, _) = props("");
        let view = ErrorPanelView::new(props, PanelChrome::Bare);
        assert_eq!(view.layout().error_text, "");
        assert!(text(&draw(&view)).contains("The error is:"));
    }
}
