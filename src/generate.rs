//! Week, month and year pages.
//!
//! Each generator validates its anchor up front and either returns the whole
//! page or an error; nothing is retained between calls.

use tracing::debug;

use crate::consts::{DAYS_IN_WEEK, MONTH_GRID_CELLS, MONTHS_IN_YEAR};
use crate::day::{build_day, DayOfCalendar};
use crate::math::{month_exists, month_length, weekday_of, year_exists};
use crate::{CalendarError, Weekday};

/// The seven days of the Monday-first week containing the given date.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date does not exist, or if the
/// week would run past the representable years.
pub fn generate_weekly_calendar(year: u32, month: u8, day: u8) -> Result<Vec<DayOfCalendar>, CalendarError> {
    debug!(year, month, day, "generating weekly calendar");

    let weekday = weekday_of(year, month, day)?;
    let first_index = i64::from(day) - i64::from(weekday.get()) + 1;
    collect_page(year, month, first_index, DAYS_IN_WEEK, Weekday::Monday)
}

/// The days of a month.
///
/// Without padding this is days 1..=N of the month. With padding it is a
/// fixed 6×7 grid of 42 days starting at the Monday on or before the 1st,
/// with neighboring months' days flagged as out-of-month.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for year 0 or a month outside 1..=12.
pub fn generate_monthly_calendar(
    include_out_of_month: bool,
    year: u32,
    month: u8,
) -> Result<Vec<DayOfCalendar>, CalendarError> {
    debug!(year, month, include_out_of_month, "generating monthly calendar");

    if !year_exists(year) || !month_exists(month) {
        return Err(CalendarError::invalid_date(year, month, 1_u8));
    }
    let first_weekday = weekday_of(year, month, 1)?;

    if include_out_of_month {
        let first_index = 2 - i64::from(first_weekday.get());
        collect_page(year, month, first_index, MONTH_GRID_CELLS, Weekday::Monday)
    } else {
        let length = usize::from(month_length(year, month));
        collect_page(year, month, 1, length, first_weekday)
    }
}

/// Twelve unpadded month pages, January through December.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for year 0.
pub fn generate_yearly_calendar(year: u32) -> Result<Vec<Vec<DayOfCalendar>>, CalendarError> {
    debug!(year, "generating yearly calendar");

    if !year_exists(year) {
        return Err(CalendarError::invalid_date(year, 1_u8, 1_u8));
    }
    let mut months = Vec::with_capacity(MONTHS_IN_YEAR);
    for month in 1..=12 {
        months.push(generate_monthly_calendar(false, year, month)?);
    }
    Ok(months)
}

/// `count` consecutive days from `first_index`, weekdays cycling from
/// `first_weekday`.
fn collect_page(
    year: u32,
    month: u8,
    first_index: i64,
    count: usize,
    first_weekday: Weekday,
) -> Result<Vec<DayOfCalendar>, CalendarError> {
    let mut weekday = first_weekday;
    let mut page = Vec::with_capacity(count);
    for index in (first_index..).take(count) {
        page.push(build_day(year, month, weekday, index)?);
        weekday = weekday.succ();
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{days_in_month, MAX_YEAR};

    #[test]
    fn test_weekly_calendar_mid_month() {
        // 2023-03-15 is a Wednesday
        let week = generate_weekly_calendar(2023, 3, 15).unwrap();
        let dates: Vec<_> = week.iter().map(DayOfCalendar::date).collect();
        assert_eq!(
            dates,
            [
                (2023, 3, 13),
                (2023, 3, 14),
                (2023, 3, 15),
                (2023, 3, 16),
                (2023, 3, 17),
                (2023, 3, 18),
                (2023, 3, 19),
            ]
        );
        assert!(week.iter().all(|d| !d.is_out_of_month));
    }

    #[test]
    fn test_weekly_calendar_spans_year_boundary() {
        // 2023-01-01 is a Sunday, so the week starts on 2022-12-26
        let week = generate_weekly_calendar(2023, 1, 1).unwrap();
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date(), (2022, 12, 26));
        assert!(week[0].is_out_of_month);
        assert_eq!(week[6].date(), (2023, 1, 1));
        assert!(!week[6].is_out_of_month);
    }

    #[test]
    fn test_weekly_calendar_weekdays_in_order() {
        let week = generate_weekly_calendar(2024, 2, 29).unwrap();
        let weekdays: Vec<_> = week.iter().map(|d| d.weekday).collect();
        assert_eq!(weekdays, Weekday::ALL);
        assert_eq!(week[6].date(), (2024, 3, 3));
    }

    #[test]
    fn test_weekly_calendar_invalid_date() {
        assert!(matches!(
            generate_weekly_calendar(2023, 2, 29),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(generate_weekly_calendar(2023, 13, 1).is_err());
        assert!(generate_weekly_calendar(0, 1, 1).is_err());
    }

    #[test]
    fn test_weekly_calendar_past_max_year() {
        // MAX_YEAR-12-31 is not a Sunday, so its week runs past the end
        assert!(generate_weekly_calendar(MAX_YEAR, 12, 31).is_err());
    }

    #[test]
    fn test_monthly_calendar_without_padding() {
        let page = generate_monthly_calendar(false, 2023, 2).unwrap();
        assert_eq!(page.len(), 28);
        assert!(page.iter().all(|d| d.month == 2 && d.year == 2023 && !d.is_out_of_month));
        assert_eq!(page[0].weekday, Weekday::Wednesday);
        assert_eq!(page[27].day, 28);
        assert_eq!(page[27].weekday, Weekday::Tuesday);
    }

    #[test]
    fn test_monthly_calendar_with_padding() {
        // 2023-03-01 is a Wednesday
        let page = generate_monthly_calendar(true, 2023, 3).unwrap();
        assert_eq!(page.len(), 42);
        assert_eq!(page[0].date(), (2023, 2, 27));
        assert_eq!(page[0].weekday, Weekday::Monday);
        assert!(page[0].is_out_of_month);
        assert_eq!(page[2].date(), (2023, 3, 1));
        assert!(!page[2].is_out_of_month);
        assert_eq!(page[41].date(), (2023, 4, 9));
        assert_eq!(page[41].weekday, Weekday::Sunday);
        assert_eq!(page.iter().filter(|d| !d.is_out_of_month).count(), 31);
    }

    #[test]
    fn test_monthly_calendar_starting_on_monday() {
        // 2024-01-01 is a Monday, so no leading padding
        let page = generate_monthly_calendar(true, 2024, 1).unwrap();
        assert_eq!(page[0].date(), (2024, 1, 1));
        assert!(!page[0].is_out_of_month);
        assert_eq!(page[41].date(), (2024, 2, 11));
    }

    #[test]
    fn test_monthly_calendar_invalid() {
        assert!(matches!(
            generate_monthly_calendar(true, 2023, 13),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(generate_monthly_calendar(false, 2023, 0).is_err());
        assert!(generate_monthly_calendar(false, 0, 1).is_err());
    }

    #[test]
    fn test_yearly_calendar_lengths() {
        for year in [1900, 2000, 2023, 2024] {
            let months = generate_yearly_calendar(year).unwrap();
            assert_eq!(months.len(), 12);
            for (month, page) in (1..=12).zip(&months) {
                assert_eq!(page.len(), usize::from(days_in_month(year, month).unwrap()));
                assert!(page.iter().all(|d| d.month == month));
            }
        }
    }

    #[test]
    fn test_yearly_calendar_invalid_year() {
        assert_eq!(
            generate_yearly_calendar(0),
            Err(CalendarError::InvalidDate {
                year:  0,
                month: 1,
                day:   1,
            })
        );
    }
}
