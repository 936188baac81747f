use std::cell::Cell;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::consts::{DECEMBER, JANUARY, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::math::{month_length, roll_day_index, weekday_unchecked};
use crate::prelude::*;
use crate::Weekday;

/// A mutable calendar date that always names an existing Gregorian date.
///
/// Setters and incrementers normalize instead of failing: an out-of-range
/// day or month carries into the neighboring unit, and the year saturates
/// at `1..=MAX_YEAR`. When a month or year change leaves the day past the
/// end of the new month, the day is clamped to that month's last day.
///
/// The weekday is computed on first read after a mutation and cached until
/// the next one. The cache uses a `Cell`, so a `CalendarDate` is meant to be
/// owned by one caller at a time.
#[derive(Debug, Clone, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
#[serde(from = "DateParts", into = "DateParts")]
pub struct CalendarDate {
    year:    u32,
    month:   u8,
    day:     u8,
    /// `None` until computed, reset by every mutation
    weekday: Cell<Option<Weekday>>,
}

/// Wire form of a [`CalendarDate`]; normalized on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DateParts {
    year:  i64,
    month: i64,
    day:   i64,
}

impl From<DateParts> for CalendarDate {
    fn from(parts: DateParts) -> Self {
        Self::new(parts.year, parts.month, parts.day)
    }
}

impl From<CalendarDate> for DateParts {
    fn from(date: CalendarDate) -> Self {
        Self {
            year:  i64::from(date.year),
            month: i64::from(date.month),
            day:   i64::from(date.day),
        }
    }
}

impl CalendarDate {
    /// Builds a date from arbitrary numbers, normalizing the way the setters
    /// do: `(2023, 14, 0)` becomes 2024-01-31.
    pub fn new(year: i64, month: i64, day: i64) -> Self {
        let mut date = Self {
            year:    clamp_year(year),
            month:   JANUARY,
            day:     MIN_DAY,
            weekday: Cell::new(None),
        };
        date.set_month(month);
        date.set_day(day);
        date
    }

    /// Today's date according to `clock`
    pub fn today<C: Clock + ?Sized>(clock: &C) -> Self {
        let (year, month, day) = clock.today();
        Self::new(i64::from(year), i64::from(month), i64::from(day))
    }

    pub const fn year(&self) -> u32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns (year, month, day)
    pub const fn to_tuple(&self) -> (u32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Sets the year, clamped to `1..=MAX_YEAR`.
    pub fn set_year(&mut self, year: i64) {
        let year = clamp_year(year);
        if year == self.year {
            return;
        }
        self.year = year;
        self.clamp_day();
        self.invalidate();
    }

    /// Sets the month. Values outside 1..=12 count from January of the
    /// current year, so month 14 is February of the next year and month 0
    /// is December of the previous one.
    pub fn set_month(&mut self, month: i64) {
        if (i64::from(JANUARY)..=i64::from(DECEMBER)).contains(&month) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let month = month as u8;
            if month != self.month {
                self.month = month;
                self.clamp_day();
                self.invalidate();
            }
            return;
        }
        self.month = JANUARY;
        self.clamp_day();
        self.invalidate();
        self.increment_month(month.saturating_sub(1));
    }

    /// Sets the day. Values outside the current month count from its first
    /// day, so day 0 is the last day of the previous month.
    pub fn set_day(&mut self, day: i64) {
        let length = month_length(self.year, self.month);
        if (i64::from(MIN_DAY)..=i64::from(length)).contains(&day) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let day = day as u8;
            if day != self.day {
                self.day = day;
                self.invalidate();
            }
            return;
        }
        self.day = MIN_DAY;
        self.invalidate();
        self.increment_day(day.saturating_sub(1));
    }

    /// Sets all three components, normalizing like [`CalendarDate::new`].
    pub fn set(&mut self, year: i64, month: i64, day: i64) {
        *self = Self::new(year, month, day);
    }

    /// Adds `delta` years; the result floors at year 1 and saturates at
    /// `MAX_YEAR`.
    pub fn increment_year(&mut self, delta: i64) {
        if delta == 0 {
            return;
        }
        self.set_year(i64::from(self.year).saturating_add(delta));
    }

    /// Adds `delta` months, wrapping into neighboring years.
    pub fn increment_month(&mut self, delta: i64) {
        if delta == 0 {
            return;
        }
        let index = i64::from(self.month - 1).saturating_add(delta);
        let years = index.div_euclid(12);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = (index.rem_euclid(12) + 1) as u8;

        self.month = month;
        self.invalidate();
        let before = self.year;
        self.increment_year(years);
        if before == self.year {
            self.clamp_day();
        }
    }

    /// Adds `delta` days, carrying through as many months and years as
    /// needed. Saturates at 0001-01-01 and `MAX_YEAR`-12-31.
    pub fn increment_day(&mut self, delta: i64) {
        if delta == 0 {
            return;
        }
        let index = i64::from(self.day).saturating_add(delta);
        let (year, month, day) = roll_day_index(self.year, self.month, index).unwrap_or_else(|_| {
            debug!(date = %self, delta, "day arithmetic saturated");
            if delta < 0 {
                (MIN_YEAR, JANUARY, MIN_DAY)
            } else {
                (MAX_YEAR, DECEMBER, month_length(MAX_YEAR, DECEMBER))
            }
        });
        self.year = year;
        self.month = month;
        self.day = day;
        self.invalidate();
    }

    /// Adds `delta` weeks.
    pub fn increment_week(&mut self, delta: i64) {
        self.increment_day(delta.saturating_mul(7));
    }

    /// Day of the week, computed lazily and cached until the next mutation.
    pub fn weekday(&self) -> Weekday {
        if let Some(weekday) = self.weekday.get() {
            return weekday;
        }
        let weekday = weekday_unchecked(self.year, self.month, self.day);
        self.weekday.set(Some(weekday));
        weekday
    }

    /// Weekday of the first day of this date's month.
    pub fn weekday_of_first_day_of_month(&self) -> Weekday {
        weekday_unchecked(self.year, self.month, MIN_DAY)
    }

    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    pub fn is_today<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        clock.today() == self.to_tuple()
    }

    #[cfg(test)]
    pub(crate) fn is_weekday_cached(&self) -> bool {
        self.weekday.get().is_some()
    }

    fn clamp_day(&mut self) {
        let length = month_length(self.year, self.month);
        if self.day > length {
            self.day = length;
        }
    }

    fn invalidate(&self) {
        self.weekday.set(None);
    }
}

fn clamp_year(year: i64) -> u32 {
    u32::try_from(year.max(i64::from(MIN_YEAR))).unwrap_or(MAX_YEAR)
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.to_tuple() == other.to_tuple()
    }
}

impl Eq for CalendarDate {}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_tuple().hash(state);
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_tuple().cmp(&other.to_tuple())
    }
}
