//! Shared fixtures for unit tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use std::sync::Mutex;

/// Clock frozen at noon UTC on a chosen date, movable between steps.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock frozen at noon UTC on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            now: Mutex::new(noon(date)),
        }
    }

    /// Moves the clock to noon UTC on `date`.
    pub fn set_date(&self, date: NaiveDate) {
        *self.now.lock().expect("clock lock") = noon(date);
    }

    /// Returns the current frozen date.
    pub fn today(&self) -> NaiveDate {
        self.utc().date_naive()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

fn noon(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_hms_opt(12, 0, 0).expect("valid time");
    Utc.from_utc_datetime(&naive)
}

/// Builds a date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
