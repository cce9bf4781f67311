//! Business-hours period editing.
//!
//! The editor never owns the period list: the hosting form passes the current
//! list in, every mutation produces a full replacement list, and the
//! replacement is handed back through a single change callback. All three
//! operations (add/remove/update) are pure functions over the list.

mod editor;
mod models;

pub use editor::{
    add_interval, normalize, remove_interval, update_interval, EditorRow, EditorView,
    PeriodsEditor, CLOSED_NOTICE,
};
pub use models::{IntervalField, TimeInterval, DEFAULT_END, DEFAULT_START, MAX_PERIODS};
