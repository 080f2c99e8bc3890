//! Headless rendering
//!
//! Draws one frame of an [`App`] into ratatui's `TestBackend` and returns
//! the buffer as plain text. Used by `cinder snapshot` and by render tests.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::app::App;
use crate::error::TerminalError;

/// Render one frame of `app` at `width` x `height`
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Result<Buffer, TerminalError> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| app.draw(f))?;
    Ok(terminal.backend().buffer().clone())
}

/// Render one frame of `app` as text, one line per row
pub fn render_to_string(app: &App, width: u16, height: u16) -> Result<String, TerminalError> {
    Ok(buffer_to_string(&render_to_buffer(app, width, height)?))
}

/// Flatten a buffer into rows with trailing blanks trimmed
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .map(|x| buffer.get(x, y).symbol())
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}
