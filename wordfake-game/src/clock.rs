//! Clock abstraction so "today" can be simulated instead of read from the
//! system.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current wall-clock time.
///
/// Everything that resolves "today" routes through this trait, which keeps
/// day-rollover behavior testable without waiting for real time to pass.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// The current local calendar day; time-of-day stripped.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Real local wall clock; the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant, for deterministic tests and tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Pin the clock to midnight on the given day.
    #[must_use]
    pub fn at_midnight(date: NaiveDate) -> Self {
        Self {
            now: date.and_hms_opt(0, 0, 0).unwrap_or_default(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
