//! Proleptic Gregorian calendar math.
//!
//! Months are 1-based (1 = January) and weekdays run 1 (Monday) to
//! 7 (Sunday) throughout the crate. Functions here validate their input and
//! fail fast; normalization lives in [`CalendarDate`](crate::CalendarDate).

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::{CalendarError, Weekday};

pub const fn is_leap_year(year: u32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Month length without validation; `month` must be in 1..=12.
pub(crate) const fn month_length(year: u32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days in the given month, leap-year aware.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if month is outside 1..=12.
pub fn days_in_month(year: u32, month: u8) -> Result<u8, CalendarError> {
    if !month_exists(month) {
        return Err(CalendarError::InvalidMonth(i64::from(month)));
    }
    Ok(month_length(year, month))
}

/// Number of days in the month before the given one. January looks at
/// December of the prior year.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if month is outside 1..=12.
pub fn days_in_previous_month(year: u32, month: u8) -> Result<u8, CalendarError> {
    if !month_exists(month) {
        return Err(CalendarError::InvalidMonth(i64::from(month)));
    }
    let (year, month) = previous_month(year, month);
    Ok(month_length(year, month))
}

pub const fn year_exists(year: u32) -> bool {
    year >= MIN_YEAR
}

pub const fn month_exists(month: u8) -> bool {
    month >= JANUARY && month <= MAX_MONTH
}

pub const fn day_exists(year: u32, month: u8, day: u8) -> bool {
    month_exists(month) && day >= MIN_DAY && day <= month_length(year, month)
}

/// Whether (year, month, day) names a real proleptic Gregorian date.
pub const fn date_exists(year: u32, month: u8, day: u8) -> bool {
    year_exists(year) && day_exists(year, month, day)
}

/// Weekday of the given date (1 = Monday .. 7 = Sunday).
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date does not exist.
pub fn weekday_of(year: u32, month: u8, day: u8) -> Result<Weekday, CalendarError> {
    if !date_exists(year, month, day) {
        return Err(CalendarError::invalid_date(year, month, day));
    }
    Ok(weekday_unchecked(year, month, day))
}

/// Weekday of the first day of a month.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` for a month outside 1..=12 and
/// `CalendarError::InvalidDate` for year 0.
pub fn weekday_of_first_day_of_month(year: u32, month: u8) -> Result<Weekday, CalendarError> {
    if !month_exists(month) {
        return Err(CalendarError::InvalidMonth(i64::from(month)));
    }
    weekday_of(year, month, MIN_DAY)
}

/// Weekday of January 1st.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for year 0.
pub fn weekday_of_first_day_of_year(year: u32) -> Result<Weekday, CalendarError> {
    weekday_of(year, JANUARY, MIN_DAY)
}

/// Weekday for a date already known to exist.
pub(crate) fn weekday_unchecked(year: u32, month: u8, day: u8) -> Weekday {
    // 1970-01-01 was a Thursday
    let offset = (days_from_civil(i64::from(year), i64::from(month), i64::from(day)) + 3).rem_euclid(7);
    Weekday::ALL[offset as usize]
}

/// Days since 1970-01-01 in the proleptic Gregorian calendar.
///
/// Counts from a March-based year so the leap day falls at the end.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let march_month = (month + 9) % 12;
    let day_of_year = (153 * march_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_GREGORIAN_CYCLE + day_of_era - 719_468
}

const fn previous_month(year: u32, month: u8) -> (u32, u8) {
    if month == JANUARY {
        (year.saturating_sub(1), DECEMBER)
    } else {
        (year, month - 1)
    }
}

const fn next_month(year: u32, month: u8) -> Option<(u32, u8)> {
    if month == DECEMBER {
        match year.checked_add(1) {
            Some(next) => Some((next, JANUARY)),
            None => None,
        }
    } else {
        Some((year, month + 1))
    }
}

/// Resolves "the `index`th day of (year, month)" into a real date.
///
/// An index of 0 or below walks back into previous months, one past the
/// month length walks forward, re-reading each crossed month's length.
/// Whole 400-year cycles are skipped first so huge indices stay cheap.
///
/// `year` and `month` must already be valid.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the result would fall before
/// 0001-01-01 or after December of `MAX_YEAR`.
pub(crate) fn roll_day_index(year: u32, month: u8, index: i64) -> Result<(u32, u8, u8), CalendarError> {
    let out_of_range = || CalendarError::invalid_date(year, month, index);

    let mut index = index;
    let mut cycles = 0_i64;
    if index > DAYS_PER_GREGORIAN_CYCLE {
        cycles = (index - 1) / DAYS_PER_GREGORIAN_CYCLE;
    } else if index < -DAYS_PER_GREGORIAN_CYCLE {
        cycles = index / DAYS_PER_GREGORIAN_CYCLE;
    }
    index -= cycles * DAYS_PER_GREGORIAN_CYCLE;

    let shifted = i64::from(year) + cycles * i64::from(GREGORIAN_CYCLE);
    if shifted < i64::from(MIN_YEAR) || shifted > i64::from(MAX_YEAR) {
        return Err(out_of_range());
    }
    let mut year = u32::try_from(shifted).map_err(|_| out_of_range())?;
    let mut month = month;

    while index < i64::from(MIN_DAY) {
        if year == MIN_YEAR && month == JANUARY {
            return Err(out_of_range());
        }
        (year, month) = previous_month(year, month);
        index += i64::from(month_length(year, month));
    }

    let mut length = month_length(year, month);
    while index > i64::from(length) {
        index -= i64::from(length);
        (year, month) = next_month(year, month).ok_or_else(out_of_range)?;
        length = month_length(year, month);
    }

    let day = u8::try_from(index).map_err(|_| out_of_range())?;
    Ok((year, month, day))
}
