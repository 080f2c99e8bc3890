//! Navigation header drawn above header-wrapped screens

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Styles;

/// Back affordance shown at the left of the header
pub const BACK_AFFORDANCE: &str = "< Back";

/// One-line header with a back affordance and a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavHeader {
    title: String,
}

impl NavHeader {
    /// Create a header titled `title`
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Header title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Draw the header into the first row of `area`
    pub fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let line = Line::from(vec![
            Span::styled(BACK_AFFORDANCE, styles.text_muted()),
            Span::raw("  "),
            Span::styled(self.title.as_str(), styles.title()),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
