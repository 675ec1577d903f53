// Row list state.
// Owns the display order of the rows and the set of selected row ids.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Number of rows on the screen. Constant for the lifetime of the state.
pub const ROW_COUNT: usize = 100;

/// Row identifier.
pub type RowId = usize;

/// A single list entry.
///
/// Equality and hashing use `id` only, so a row can be used as a key
/// regardless of its display value.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    pub id: RowId,
    pub value: i64,
}

impl Row {
    pub fn new(id: RowId, value: i64) -> Self {
        Self { id, value }
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Row {}

impl Hash for Row {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Ordered rows plus selection.
#[derive(Debug, Clone)]
pub struct RowListState {
    rows: Vec<Row>,
    selected: HashSet<RowId>,
    rng: StdRng,
}

impl Default for RowListState {
    fn default() -> Self {
        Self::new()
    }
}

impl RowListState {
    /// Rows 0..100 in order, nothing selected.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Same as [`RowListState::new`] but with a reproducible shuffle sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rows: default_rows(),
            selected: HashSet::new(),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<RowId> {
        let mut ids: Vec<RowId> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Row at a display position, or `None` when out of range.
    pub fn row_at(&self, index: usize) -> Option<Row> {
        self.rows.get(index).copied()
    }

    /// Display position of a row.
    pub fn position_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Flip the selection of `id`. Existence is not checked.
    pub fn toggle_selection(&mut self, id: RowId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Move a row to position 0, keeping the others in relative order.
    pub fn move_to_front(&mut self, id: RowId) {
        let Some(index) = self.position_of(id) else {
            return;
        };
        if index == 0 {
            return;
        }
        let row = self.rows.remove(index);
        self.rows.insert(0, row);
    }

    /// Replace the order with a uniformly random permutation.
    pub fn shuffle(&mut self) {
        self.rows.shuffle(&mut self.rng);
    }
}

fn default_rows() -> Vec<Row> {
    (0..ROW_COUNT).map(|id| Row::new(id, id as i64)).collect()
}
