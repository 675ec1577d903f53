// App state and main event loop.
// Owns the list screen and dispatches keyboard and mouse input to it.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Margin, Rect};
use ratatui::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::MixerError;
use crate::state::{ListScreen, RowListState, StatusMessage};
use crate::ui;

/// Main application state.
pub struct App {
    /// The row list and its cursor.
    pub screen: ListScreen,
    /// Header title.
    pub title: String,
    /// Last status message.
    pub status: Option<StatusMessage>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Area the list was last drawn into, for mouse hit testing.
    pub list_area: Rect,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let rows = match config.seed {
            Some(seed) => RowListState::with_seed(seed),
            None => RowListState::new(),
        };
        Self {
            screen: ListScreen::new(rows, config.transition_duration()),
            title: config.title.clone(),
            status: None,
            show_help: false,
            list_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.screen.expire_transition(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard and mouse events.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q')) {
                self.show_help = false;
            }
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Down | KeyCode::Char('j') => self.screen.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.screen.select_prev(),
            KeyCode::PageDown => self.screen.page_down(self.page_size()),
            KeyCode::PageUp => self.screen.page_up(self.page_size()),
            KeyCode::Home | KeyCode::Char('g') => self.screen.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.screen.select_last(),
            KeyCode::Enter | KeyCode::Char(' ') => self.tap_cursor(),
            KeyCode::Char('s') => self.shuffle(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Rows under the help overlay are not reachable
        if self.show_help {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.row_index_at(mouse.column, mouse.row) {
                    self.screen.list_state.select(Some(index));
                    self.tap_cursor();
                }
            }
            MouseEventKind::ScrollDown => self.screen.select_next(),
            MouseEventKind::ScrollUp => self.screen.select_prev(),
            _ => {}
        }
    }

    /// Show a config load failure. Unreadable files are errors, bad contents warnings.
    pub fn report_config_error(&mut self, error: &MixerError) {
        warn!(error = %error, "config ignored, using defaults");
        let message = format!("Config ignored: {error}");
        self.status = Some(match error {
            MixerError::Io(_) => StatusMessage::error(message),
            _ => StatusMessage::warn(message),
        });
    }

    /// Show that the log file could not be opened.
    pub fn report_logging_error(&mut self, error: &MixerError) {
        self.status = Some(StatusMessage::warn(format!("Logging disabled: {error}")));
    }

    /// Map a terminal cell to a list index using the last drawn list area.
    pub fn row_index_at(&self, column: u16, row: u16) -> Option<usize> {
        // Inside the list border
        let inner = self.list_area.inner(Margin::new(1, 1));
        let hit = column >= inner.x
            && column < inner.right()
            && row >= inner.y
            && row < inner.bottom();
        if !hit {
            return None;
        }
        let index = self.screen.list_state.offset() + (row - inner.y) as usize;
        (index < self.screen.rows.len()).then_some(index)
    }

    fn tap_cursor(&mut self) {
        let Some(outcome) = self.screen.tap_cursor() else {
            return;
        };
        info!(
            id = outcome.id,
            selected = outcome.selected,
            moved = outcome.moved,
            "row tapped"
        );
        let verb = if outcome.selected { "Selected" } else { "Deselected" };
        let message = if outcome.moved {
            format!("{verb} row {} and moved it to the top", outcome.id)
        } else {
            format!("{verb} row {}", outcome.id)
        };
        self.status = Some(StatusMessage::info(message));
    }

    fn shuffle(&mut self) {
        self.screen.shuffle();
        debug!(front = ?self.screen.rows.row_at(0).map(|r| r.id), "rows shuffled");
        self.status = Some(StatusMessage::info(format!(
            "Shuffled {} rows",
            self.screen.rows.len()
        )));
    }

    fn page_size(&self) -> usize {
        self.list_area.height.saturating_sub(2).max(1) as usize
    }
}

/// Run `setup` then `body`, calling `restore` afterwards whichever of them fails.
pub fn with_restore<T>(
    setup: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    let result = setup().and_then(|_| body());
    restore();
    result
}
