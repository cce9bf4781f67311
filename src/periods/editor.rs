use crate::periods::models::{IntervalField, TimeInterval, MAX_PERIODS};

/// Notice shown when the list is empty and editing is enabled, so an
/// explicitly empty day ("closed") can be told apart from one still loading.
pub const CLOSED_NOTICE: &str = "No times - closed";

/// Normalize the owner-supplied list: a missing list is an empty list
pub fn normalize(periods: Option<&[TimeInterval]>) -> Vec<TimeInterval> {
    periods.map(<[TimeInterval]>::to_vec).unwrap_or_default()
}

/// Append a new placeholder interval.
///
/// A list already at [`MAX_PERIODS`] is returned unchanged; the cap is part of
/// the contract even when the add affordance is bypassed.
pub fn add_interval(periods: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut next = periods.to_vec();
    if next.len() < MAX_PERIODS {
        next.push(TimeInterval::default());
    }
    next
}

/// Remove the interval at `index`, preserving the relative order of the rest.
/// Out-of-range indices leave the list unchanged.
pub fn remove_interval(periods: &[TimeInterval], index: usize) -> Vec<TimeInterval> {
    let mut next = periods.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// Replace a single field of the interval at `index`.
///
/// Only the named field changes; every other field and element is preserved.
/// The value is not validated as a time, it passes through as given.
/// Out-of-range indices leave the list unchanged.
pub fn update_interval(
    periods: &[TimeInterval],
    index: usize,
    field: IntervalField,
    value: &str,
) -> Vec<TimeInterval> {
    let mut next = periods.to_vec();
    if let Some(interval) = next.get_mut(index) {
        match field {
            IntervalField::Start => interval.start = value.to_string(),
            IntervalField::End => interval.end = value.to_string(),
        }
    }
    next
}

/// One rendered row of the editor
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EditorRow {
    pub index: usize,
    pub start: String,
    pub end: String,
    /// Whether the remove affordance is shown for this row
    pub removable: bool,
}

/// Render model for the editor: rows plus affordance visibility
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EditorView {
    pub rows: Vec<EditorRow>,
    /// Add affordance is shown only below the cap and when editing is enabled
    pub show_add: bool,
    /// Textual indicator for an explicitly empty (closed) day
    pub closed_notice: Option<String>,
    pub disabled: bool,
}

/// The period editor boundary.
///
/// Holds the owner's current list (the props of the latest render), a
/// `disabled` flag, and the single change callback. It keeps no other state:
/// each operation computes a replacement list and hands it to the callback,
/// then adopts it as the current render input.
pub struct PeriodsEditor<F>
where
    F: FnMut(Vec<TimeInterval>),
{
    periods: Vec<TimeInterval>,
    disabled: bool,
    on_change: F,
}

impl<F> PeriodsEditor<F>
where
    F: FnMut(Vec<TimeInterval>),
{
    /// Create an editor over the owner's list. `None` is treated as empty.
    pub fn new(periods: Option<&[TimeInterval]>, disabled: bool, on_change: F) -> Self {
        Self {
            periods: normalize(periods),
            disabled,
            on_change,
        }
    }

    /// Current list as last seen by the editor
    pub fn periods(&self) -> &[TimeInterval] {
        &self.periods
    }

    /// Owner pushes its latest list, so positional edits apply to the freshest
    /// snapshot rather than a stale one
    pub fn set_periods(&mut self, periods: Option<&[TimeInterval]>) {
        self.periods = normalize(periods);
    }

    /// Enable or disable editing
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Append a placeholder interval; no-op when disabled or at the cap
    pub fn add(&mut self) {
        if self.disabled || self.periods.len() >= MAX_PERIODS {
            return;
        }
        let next = add_interval(&self.periods);
        self.commit(next);
    }

    /// Remove the interval at `index`; no-op when disabled or out of range
    pub fn remove(&mut self, index: usize) {
        if self.disabled || index >= self.periods.len() {
            return;
        }
        let next = remove_interval(&self.periods, index);
        self.commit(next);
    }

    /// Update one field of the interval at `index`; no-op when disabled or
    /// out of range
    pub fn update(&mut self, index: usize, field: IntervalField, value: &str) {
        if self.disabled || index >= self.periods.len() {
            return;
        }
        let next = update_interval(&self.periods, index, field, value);
        self.commit(next);
    }

    /// Build the render model for the current list
    pub fn view(&self) -> EditorView {
        let rows = self
            .periods
            .iter()
            .enumerate()
            .map(|(index, interval)| EditorRow {
                index,
                start: interval.start.clone(),
                end: interval.end.clone(),
                removable: !self.disabled,
            })
            .collect::<Vec<_>>();

        let closed_notice = if rows.is_empty() && !self.disabled {
            Some(CLOSED_NOTICE.to_string())
        } else {
            None
        };

        EditorView {
            show_add: !self.disabled && self.periods.len() < MAX_PERIODS,
            closed_notice,
            disabled: self.disabled,
            rows,
        }
    }

    /// Hand the replacement list to the owner and adopt it locally
    fn commit(&mut self, next: Vec<TimeInterval>) {
        (self.on_change)(next.clone());
        self.periods = next;
    }
}
