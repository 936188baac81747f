use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::clock::Clock;
use crate::math::{month_exists, roll_day_index, year_exists};
use crate::prelude::*;
use crate::{CalendarError, Weekday};

/// One cell of a calendar page, ready for rendering.
///
/// `is_out_of_month` marks padding days that belong to the month before or
/// after the one the page was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct DayOfCalendar {
    pub day:             u8,
    pub month:           u8,
    pub year:            u32,
    pub weekday:         Weekday,
    pub is_out_of_month: bool,
}

impl DayOfCalendar {
    pub const fn is_weekend(&self) -> bool {
        self.weekday.is_weekend()
    }

    pub fn is_today<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        clock.today() == self.date()
    }

    /// Returns (year, month, day)
    pub const fn date(&self) -> (u32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

/// Builds the display record for the `day_index`th day of (year, month).
///
/// Indices of 0 or below resolve into previous months and indices past the
/// month's length into following ones, crossing years as needed. `weekday`
/// is stored as given; generators pass the weekday of the cell's column.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` for a month outside 1..=12 and
/// `CalendarError::InvalidDate` for year 0 or when the resolved day falls
/// outside the representable years.
pub fn build_day(year: u32, month: u8, weekday: Weekday, day_index: i64) -> Result<DayOfCalendar, CalendarError> {
    if !month_exists(month) {
        return Err(CalendarError::InvalidMonth(i64::from(month)));
    }
    if !year_exists(year) {
        return Err(CalendarError::invalid_date(year, month, day_index));
    }

    let (resolved_year, resolved_month, day) = roll_day_index(year, month, day_index)?;
    let is_out_of_month = (resolved_year, resolved_month) != (year, month);
    if is_out_of_month {
        trace!(
            year,
            month,
            day_index,
            resolved_year,
            resolved_month,
            day,
            "resolved out-of-month day"
        );
    }

    Ok(DayOfCalendar {
        day,
        month: resolved_month,
        year: resolved_year,
        weekday,
        is_out_of_month,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedClock, MAX_YEAR};

    #[test]
    fn test_build_day_in_month() {
        let day = build_day(2023, 3, Weekday::Tuesday, 7).unwrap();
        assert_eq!(day.date(), (2023, 3, 7));
        assert_eq!(day.weekday, Weekday::Tuesday);
        assert!(!day.is_out_of_month);
    }

    #[test]
    fn test_build_day_index_zero_is_previous_month_end() {
        let day = build_day(2023, 3, Weekday::Tuesday, 0).unwrap();
        assert_eq!(day.date(), (2023, 2, 28));
        assert!(day.is_out_of_month);
    }

    #[test]
    fn test_build_day_rolls_over_year_boundaries() {
        struct TestCase {
            year:        u32,
            month:       u8,
            day_index:   i64,
            expected:    (u32, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2023,
                month:       1,
                day_index:   -1,
                expected:    (2022, 12, 30),
                description: "before January",
            },
            TestCase {
                year:        2023,
                month:       12,
                day_index:   33,
                expected:    (2024, 1, 2),
                description: "after December",
            },
            TestCase {
                year:        2024,
                month:       1,
                day_index:   62,
                expected:    (2024, 3, 2),
                description: "through a leap February",
            },
            TestCase {
                year:        2023,
                month:       3,
                day_index:   -59,
                expected:    (2022, 12, 31),
                description: "through several previous months",
            },
        ];

        for case in &cases {
            let day = build_day(case.year, case.month, Weekday::Monday, case.day_index).unwrap();
            assert_eq!(day.date(), case.expected, "{}", case.description);
            assert!(day.is_out_of_month, "{}", case.description);
        }
    }

    #[test]
    fn test_build_day_invalid_month() {
        assert_eq!(
            build_day(2023, 13, Weekday::Monday, 1),
            Err(CalendarError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_build_day_out_of_range_years() {
        assert!(matches!(
            build_day(0, 1, Weekday::Monday, 1),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(build_day(1, 1, Weekday::Monday, 0).is_err());
        assert!(build_day(MAX_YEAR, 12, Weekday::Monday, 32).is_err());
    }

    #[test]
    fn test_weekend_and_today() {
        let day = build_day(2023, 1, Weekday::Sunday, 1).unwrap();
        assert!(day.is_weekend());
        assert!(day.is_today(&FixedClock::new(2023, 1, 1)));
        assert!(!day.is_today(&FixedClock::new(2023, 1, 2)));
    }

    #[test]
    fn test_display_and_serde() {
        let day = build_day(2023, 3, Weekday::Tuesday, 0).unwrap();
        assert_eq!(day.to_string(), "2023-02-28");

        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(
            json,
            r#"{"day":28,"month":2,"year":2023,"weekday":2,"is_out_of_month":true}"#
        );
        let parsed: DayOfCalendar = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, day);
    }
}
