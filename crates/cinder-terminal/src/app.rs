//! # Screen Application
//!
//! Drives one leaf screen against the store:
//!
//! ```text
//! key → view.handle_key → props callback → Store::dispatch
//!     → listener marks dirty → Binding::derive_props → view.update → draw
//! ```
//!
//! The app exits once the route stack pops below the screen's entry, or on
//! `q` / Ctrl-C.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cinder_app::{
    AppState, Binding, ConversationErrorBinding, DeleteConfirmationBinding, Dispatcher, Intent,
    ListenerId, PanelChrome, Platform, RouteEntry, RouteName, Store,
};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Rect},
    text::Span,
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::components::{
    Component, DeleteConfirmationView, ErrorPanelView, InputAction, Styles,
};
use crate::error::TerminalError;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// View for whichever screen the app was opened on
#[derive(Debug, Clone)]
pub enum ScreenView {
    /// "Really delete" confirmation
    DeleteConfirmation(DeleteConfirmationView),
    /// Conversation error panel
    ConversationError(ErrorPanelView),
}

impl ScreenView {
    /// Derive props for `entry` and build its view
    pub fn open(
        state: &AppState,
        entry: &RouteEntry,
        dispatcher: &Dispatcher,
        platform: Platform,
    ) -> Result<Self, TerminalError> {
        match entry.name {
            RouteName::ReallyDelete => {
                let props = DeleteConfirmationBinding.derive_props(state, &entry.props, dispatcher)?;
                Ok(Self::DeleteConfirmation(DeleteConfirmationView::new(props)))
            }
            RouteName::ConversationError => {
                let props = ConversationErrorBinding.derive_props(state, &entry.props, dispatcher)?;
                Ok(Self::ConversationError(ErrorPanelView::new(
                    props,
                    PanelChrome::for_platform(platform),
                )))
            }
            route => Err(TerminalError::NoScreen { route }),
        }
    }

    /// Re-derive props for `entry` and hand them to the existing view
    pub fn refresh(
        &mut self,
        state: &AppState,
        entry: &RouteEntry,
        dispatcher: &Dispatcher,
    ) -> Result<(), TerminalError> {
        match self {
            Self::DeleteConfirmation(view) => {
                view.update(DeleteConfirmationBinding.derive_props(state, &entry.props, dispatcher)?);
            }
            Self::ConversationError(view) => {
                view.update(ConversationErrorBinding.derive_props(state, &entry.props, dispatcher)?);
            }
        }
        Ok(())
    }

    fn component(&self) -> &dyn Component {
        match self {
            Self::DeleteConfirmation(view) => view,
            Self::ConversationError(view) => view,
        }
    }

    fn component_mut(&mut self) -> &mut dyn Component {
        match self {
            Self::DeleteConfirmation(view) => view,
            Self::ConversationError(view) => view,
        }
    }
}

/// One screen bound to a store
pub struct App {
    store: Arc<Store>,
    dispatcher: Dispatcher,
    entry: RouteEntry,
    entry_depth: usize,
    view: ScreenView,
    styles: Styles,
    dirty: Arc<AtomicBool>,
    listener: ListenerId,
    quit: bool,
}

impl App {
    /// Open the screen on top of the store's route stack
    pub fn new(store: Arc<Store>, platform: Platform, styles: Styles) -> Result<Self, TerminalError> {
        let dispatcher: Dispatcher = store.clone();
        let (entry, entry_depth) =
            store.read(|s| (s.routes.current().clone(), s.routes.depth()));
        let view = store.read(|s| ScreenView::open(s, &entry, &dispatcher, platform))?;

        let dirty = Arc::new(AtomicBool::new(false));
        let flag = dirty.clone();
        let listener = store.subscribe(Arc::new(move |_: &Intent, _: &AppState| {
            flag.store(true, Ordering::SeqCst);
        }));

        tracing::debug!(route = entry.name.name(), depth = entry_depth, "Screen opened");

        Ok(Self {
            store,
            dispatcher,
            entry,
            entry_depth,
            view,
            styles,
            dirty,
            listener,
            quit: false,
        })
    }

    /// Current view
    pub fn view(&self) -> &ScreenView {
        &self.view
    }

    /// Check if the screen's entry has been popped
    pub fn is_closed(&self) -> bool {
        self.store.read(|s| s.routes.depth() < self.entry_depth)
    }

    /// Check if the event loop should stop
    pub fn should_exit(&self) -> bool {
        self.quit || self.is_closed()
    }

    /// Re-derive props if the store changed since the last call
    pub fn refresh(&mut self) -> Result<(), TerminalError> {
        if !self.dirty.swap(false, Ordering::SeqCst) || self.is_closed() {
            return Ok(());
        }
        let store = self.store.clone();
        store.read(|s| self.view.refresh(s, &self.entry, &self.dispatcher))
    }

    /// Route a key press to the view, then pick up any store changes
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<InputAction>, TerminalError> {
        let interrupt = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if interrupt || key.code == KeyCode::Char('q') {
            self.quit = true;
            return Ok(None);
        }

        let action = self.view.component_mut().handle_key(key);
        if let Some(action) = action {
            tracing::trace!(?action, "Key handled");
        }
        self.refresh()?;
        Ok(action)
    }

    /// Draw the current view over the whole frame
    pub fn draw(&self, f: &mut Frame<'_>) {
        let area = f.size();
        let component = self.view.component();
        let (min_width, min_height) = component.min_size();
        if area.width < min_width || area.height < min_height {
            render_too_small(f, area, &self.styles);
            return;
        }
        component.render(f, area, &self.styles);
    }

    /// Run the event loop on `terminal` until the screen closes
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), TerminalError> {
        loop {
            self.refresh()?;
            if self.should_exit() {
                break;
            }

            terminal.draw(|f| self.draw(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.store.unsubscribe(self.listener);
    }
}

fn render_too_small(f: &mut Frame<'_>, area: Rect, styles: &Styles) {
    let notice = Paragraph::new(Span::styled("Terminal too small", styles.text_muted()))
        .alignment(Alignment::Center);
    f.render_widget(notice, area);
}

/// Raw mode plus alternate screen, undone on drop if not restored earlier
struct TerminalSession {
    restored: bool,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let session = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(session)
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let raw = disable_raw_mode();
        screen.and(raw)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Combine the loop result with the restore result; a loop error wins
fn finish(run: Result<(), TerminalError>, restore: io::Result<()>) -> Result<(), TerminalError> {
    run?;
    restore?;
    Ok(())
}

/// Run `app` on the real terminal using the alternate screen.
///
/// The terminal is restored on every exit path, including setup failures.
pub fn run_interactive(app: &mut App) -> Result<(), TerminalError> {
    let mut session = TerminalSession::enter()?;
    let run = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(TerminalError::from)
        .and_then(|mut terminal| app.run(&mut terminal));
    let restore = session.restore();
    finish(run, restore)
}
