// List screen state.
// Wraps the row list with a cursor and the tap policy used by the UI.

use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use super::rows::{RowId, RowListState};

/// Result of tapping a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapOutcome {
    pub id: RowId,
    /// Selection after the tap.
    pub selected: bool,
    /// Whether the row was moved to the front.
    pub moved: bool,
}

/// Row that was just moved to the front, highlighted until `until`.
#[derive(Debug, Clone, Copy)]
struct Transition {
    id: RowId,
    until: Instant,
}

/// State for the single list screen.
#[derive(Debug, Clone)]
pub struct ListScreen {
    pub rows: RowListState,
    pub list_state: ListState,
    transition_duration: Duration,
    transition: Option<Transition>,
}

impl ListScreen {
    pub fn new(rows: RowListState, transition_duration: Duration) -> Self {
        let mut list_state = ListState::default();
        if !rows.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            rows,
            list_state,
            transition_duration,
            transition: None,
        }
    }

    /// Get the cursor index.
    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Tap the row at `index`.
    ///
    /// A row that is neither selected nor first is selected and moved to the
    /// front. Any other tap only toggles the selection.
    pub fn tap(&mut self, index: usize) -> Option<TapOutcome> {
        let row = self.rows.row_at(index)?;
        let moved = !self.rows.is_selected(row.id) && index != 0;

        self.rows.toggle_selection(row.id);
        if moved {
            self.rows.move_to_front(row.id);
            self.transition = Some(Transition {
                id: row.id,
                until: Instant::now() + self.transition_duration,
            });
        }

        Some(TapOutcome {
            id: row.id,
            selected: self.rows.is_selected(row.id),
            moved,
        })
    }

    /// Tap the row under the cursor.
    pub fn tap_cursor(&mut self) -> Option<TapOutcome> {
        let index = self.cursor()?;
        self.tap(index)
    }

    /// Shuffle the rows. The cursor keeps its index.
    pub fn shuffle(&mut self) {
        self.rows.shuffle();
        self.transition = None;
    }

    /// Whether `id` should be drawn with the move-to-front highlight.
    pub fn is_highlighted(&self, id: RowId, now: Instant) -> bool {
        self.transition
            .is_some_and(|t| t.id == id && now < t.until)
    }

    /// Whether a transition is still running.
    pub fn transition_active(&self, now: Instant) -> bool {
        self.transition.is_some_and(|t| now < t.until)
    }

    /// Drop the transition marker once it has expired.
    pub fn expire_transition(&mut self, now: Instant) {
        if !self.transition_active(now) {
            self.transition = None;
        }
    }

    /// Move the cursor down one row.
    pub fn select_next(&mut self) {
        self.move_cursor(1);
    }

    /// Move the cursor up one row.
    pub fn select_prev(&mut self) {
        self.move_cursor(-1);
    }

    pub fn page_down(&mut self, page: usize) {
        self.move_cursor(page.max(1) as isize);
    }

    pub fn page_up(&mut self, page: usize) {
        self.move_cursor(-(page.max(1) as isize));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(self.rows.len() - 1));
        }
    }

    /// Move the cursor by `delta`, clamped to the list bounds.
    fn move_cursor(&mut self, delta: isize) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_add_signed(delta).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}
