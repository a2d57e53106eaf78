use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Clock abstracts access to the current wall-clock time so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current local date. Defaults to `now().date()`.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Reads the machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same day. Used for tests and reproducible reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.today.and_time(NaiveTime::MIN)
    }
}
