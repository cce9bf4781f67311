use aukiolo::periods::{
    add_interval, normalize, remove_interval, update_interval, IntervalField, PeriodsEditor,
    TimeInterval, DEFAULT_END, DEFAULT_START, MAX_PERIODS,
};
use std::sync::{Arc, Mutex};

/// Build a list of distinct intervals for positional tests
fn sample_periods(len: usize) -> Vec<TimeInterval> {
    (0..len)
        .map(|i| TimeInterval::new(format!("{:02}:00", 8 + i), format!("{:02}:30", 8 + i)))
        .collect()
}

/// Collect every list the editor hands to its change callback
fn recording_editor(
    periods: Option<&[TimeInterval]>,
    disabled: bool,
) -> (
    PeriodsEditor<impl FnMut(Vec<TimeInterval>)>,
    Arc<Mutex<Vec<Vec<TimeInterval>>>>,
) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&calls);
    let editor = PeriodsEditor::new(periods, disabled, move |list| {
        recorder.lock().unwrap().push(list);
    });
    (editor, calls)
}

/// Removing one element and updating a disjoint one commute, once the
/// positional shift is accounted for
#[test]
fn test_remove_and_update_commute_on_disjoint_indices() {
    let periods = sample_periods(4);

    // Case 1: update index above the removal point (shifts down by one)
    let remove_first = update_interval(&remove_interval(&periods, 1), 2, IntervalField::Start, "20:00");
    let update_first = remove_interval(
        &update_interval(&periods, 3, IntervalField::Start, "20:00"),
        1,
    );
    assert_eq!(remove_first, update_first);

    // Case 2: update index below the removal point (no shift)
    let remove_first = update_interval(&remove_interval(&periods, 3), 0, IntervalField::End, "21:00");
    let update_first = remove_interval(
        &update_interval(&periods, 0, IntervalField::End, "21:00"),
        3,
    );
    assert_eq!(remove_first, update_first);
}

/// Direct adds on a full list are silently rejected
#[test]
fn test_add_rejected_at_cap() {
    let full = sample_periods(MAX_PERIODS);
    assert_eq!(add_interval(&full), full);
}

/// The add affordance is hidden once the cap is reached and the editor
/// no-ops without notifying the owner
#[test]
fn test_add_affordance_hidden_at_cap() {
    let full = sample_periods(MAX_PERIODS);
    let (mut editor, calls) = recording_editor(Some(&full), false);

    assert!(!editor.view().show_add);

    editor.add();
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(editor.periods().len(), MAX_PERIODS);
}

/// Below the cap, adding appends the placeholder range and reports the
/// full replacement list
#[test]
fn test_add_appends_placeholder() {
    let periods = sample_periods(2);
    let (mut editor, calls) = recording_editor(Some(&periods), false);

    assert!(editor.view().show_add);
    editor.add();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 3);
    assert_eq!(calls[0][2], TimeInterval::new(DEFAULT_START, DEFAULT_END));
    // Existing elements are untouched
    assert_eq!(&calls[0][..2], &periods[..]);
}

/// Removing from an empty list is a no-op and the callback stays silent
#[test]
fn test_remove_from_empty_is_noop() {
    assert_eq!(remove_interval(&[], 0), Vec::<TimeInterval>::new());

    let (mut editor, calls) = recording_editor(Some(&[]), false);
    editor.remove(0);
    assert!(calls.lock().unwrap().is_empty());
}

/// Removal preserves the relative order of the remaining elements
#[test]
fn test_remove_preserves_order() {
    let periods = sample_periods(4);
    let next = remove_interval(&periods, 1);
    assert_eq!(next, vec![periods[0].clone(), periods[2].clone(), periods[3].clone()]);
}

/// Updating `start` never alters `end` at the same index nor any other element
#[test]
fn test_update_touches_only_named_field() {
    let periods = sample_periods(3);
    let next = update_interval(&periods, 1, IntervalField::Start, "06:15");

    assert_eq!(next[1].start, "06:15");
    assert_eq!(next[1].end, periods[1].end);
    assert_eq!(next[0], periods[0]);
    assert_eq!(next[2], periods[2]);
}

/// Values pass through unvalidated, malformed times included
#[test]
fn test_update_passes_invalid_strings_through() {
    let periods = sample_periods(1);
    let next = update_interval(&periods, 0, IntervalField::End, "not a time");
    assert_eq!(next[0].end, "not a time");
}

/// Out-of-range updates leave the list unchanged
#[test]
fn test_update_out_of_range_is_noop() {
    let periods = sample_periods(2);
    assert_eq!(
        update_interval(&periods, 5, IntervalField::Start, "09:00"),
        periods
    );
}

/// A missing list behaves exactly like an explicitly empty one
#[test]
fn test_missing_list_equals_empty_list() {
    assert_eq!(normalize(None), normalize(Some(&[])));

    let (none_editor, _) = recording_editor(None, false);
    let (empty_editor, _) = recording_editor(Some(&[]), false);
    assert_eq!(none_editor.view(), empty_editor.view());
}

/// An empty enabled editor still offers the add affordance and shows the
/// closed notice
#[test]
fn test_empty_view_shows_closed_notice() {
    let (editor, _) = recording_editor(None, false);
    let view = editor.view();

    assert!(view.rows.is_empty());
    assert!(view.show_add);
    assert!(view.closed_notice.is_some());
}

/// A disabled editor renders read-only: no affordances, no notice, no edits
#[test]
fn test_disabled_editor_is_read_only() {
    let periods = sample_periods(2);
    let (mut editor, calls) = recording_editor(Some(&periods), true);

    let view = editor.view();
    assert!(!view.show_add);
    assert!(view.closed_notice.is_none());
    assert!(view.rows.iter().all(|row| !row.removable));
    // Values still display while disabled
    assert_eq!(view.rows[0].start, periods[0].start);

    editor.add();
    editor.remove(0);
    editor.update(0, IntervalField::Start, "09:00");
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(editor.periods(), &periods[..]);
}

/// Positional removal applies to the owner's latest list, not a stale snapshot
#[test]
fn test_remove_uses_latest_list() {
    let (mut editor, calls) = recording_editor(Some(&sample_periods(3)), false);

    // Owner replaced the list between renders
    let latest = sample_periods(2);
    editor.set_periods(Some(&latest));
    editor.remove(1);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], vec![latest[0].clone()]);
}
