use std::sync::{Mutex, PoisonError};

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

/// Source of the user's current calendar date as (year, month, day).
pub trait Clock {
    fn today(&self) -> (u32, u8, u8);
}

/// Reads today's date from the host's local clock.
///
/// The last observed calendar day is kept so a day rollover is noticed
/// (and logged) once.
#[derive(Debug, Default)]
pub struct SystemClock {
    last_seen: Mutex<Option<(u32, u8, u8)>>,
}

impl SystemClock {
    pub const fn new() -> Self {
        Self {
            last_seen: Mutex::new(None),
        }
    }

    /// The most recently sampled date, if any
    pub fn last_seen(&self) -> Option<(u32, u8, u8)> {
        *self.last_seen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> (u32, u8, u8) {
        let sampled = date_parts(Local::now().date_naive());
        let mut last_seen = self.last_seen.lock().unwrap_or_else(PoisonError::into_inner);
        if *last_seen != Some(sampled) {
            debug!(
                year = sampled.0,
                month = sampled.1,
                day = sampled.2,
                "observed new calendar day"
            );
            *last_seen = Some(sampled);
        }
        sampled
    }
}

/// Converts a chrono date into 1-based (year, month, day); years before 1
/// pin to 1.
fn date_parts(date: NaiveDate) -> (u32, u8, u8) {
    let year = u32::try_from(date.year()).unwrap_or(1).max(1);
    // chrono guarantees month 1..=12 and day 1..=31
    let month = u8::try_from(date.month()).unwrap_or(1);
    let day = u8::try_from(date.day()).unwrap_or(1);
    (year, month, day)
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock {
    year:  u32,
    month: u8,
    day:   u8,
}

impl FixedClock {
    pub const fn new(year: u32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> (u32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> (u32, u8, u8) {
        (**self).today()
    }
}
