// State management module.
// Row order and selection, the list screen around it, and status messages.

pub mod rows;
pub mod screen;
pub mod status;

pub use rows::{Row, RowListState};
pub use screen::ListScreen;
pub use status::{StatusLevel, StatusMessage};
