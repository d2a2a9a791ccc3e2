// Time Provider Port (for testability)

use chrono::{DateTime, Local, NaiveDateTime, Timelike};

/// Time provider interface (allows fixed clocks in tests)
pub trait TimeProvider: Send + Sync {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> i64;

    /// Current local wall-clock time, truncated to whole seconds.
    ///
    /// Returns `None` when the reading cannot be represented as a calendar date.
    fn now_local(&self) -> Option<NaiveDateTime> {
        local_from_millis(self.now_millis())
    }
}

/// Convert milliseconds since epoch to local wall-clock time at second resolution
pub fn local_from_millis(millis: i64) -> Option<NaiveDateTime> {
    let utc = DateTime::from_timestamp_millis(millis)?;
    utc.with_timezone(&Local).naive_local().with_nanosecond(0)
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
