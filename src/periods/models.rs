/// Maximum number of periods a single day can hold
pub const MAX_PERIODS: usize = 5;

/// Start time for a freshly added period (HH:MM)
pub const DEFAULT_START: &str = "13:00";

/// End time for a freshly added period (HH:MM)
pub const DEFAULT_END: &str = "17:00";

/// One open window within a day, as wall-clock "HH:MM" strings.
///
/// The strings are opaque to this module: no timezone, no date component, and
/// no check that `start < end`. Overlapping or inverted intervals are the
/// owner's concern.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeInterval {
    pub start: String,
    pub end: String,
}

impl TimeInterval {
    /// Create an interval from explicit start and end times
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Format the interval as a human-readable string
    pub fn format(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

impl Default for TimeInterval {
    /// The placeholder range used for newly added periods
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_END)
    }
}

/// Which side of an interval an update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalField {
    Start,
    End,
}
