//! Build clock
//!
//! Date and time are read separately, so a render straddling midnight can
//! pair one day's date with the next day's time.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Source of the build date and build time
pub trait Clock {
    /// Current local date
    fn date(&self) -> NaiveDate;

    /// Current local time of day
    fn time(&self) -> NaiveTime;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn date(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn time(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn date(&self) -> NaiveDate {
        self.0.date()
    }

    fn time(&self) -> NaiveTime {
        self.0.time()
    }
}
