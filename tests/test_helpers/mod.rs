//! Shared fixtures for integration tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Clock frozen at noon UTC on a chosen date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at noon UTC on `day`.
    pub fn on(day: NaiveDate) -> Self {
        let noon = day.and_hms_opt(12, 0, 0).expect("valid time");
        Self {
            now: Utc.from_utc_datetime(&noon),
        }
    }

    /// Returns the frozen date.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Builds a date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Scoped environment overrides, restored on drop.
///
/// A process-wide mutex is held for the guard's lifetime so only one
/// guard mutates the environment at a time.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Applies every change, where `None` removes the variable.
    pub fn set_many(changes: &[(OsString, Option<OsString>)]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = changes
            .iter()
            .map(|(key, value)| {
                let old = env::var_os(key);
                // SAFETY: ENV_MUTEX serializes environment mutation in tests.
                unsafe {
                    match value {
                        Some(new_value) => env::set_var(key, new_value),
                        None => env::remove_var(key),
                    }
                }
                (key.clone(), old)
            })
            .collect();
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            // SAFETY: ENV_MUTEX serializes environment mutation in tests.
            unsafe {
                match value {
                    Some(old) => env::set_var(&key, old),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}
