//! Proleptic Gregorian calendar pages.
//!
//! A [`CalendarDate`] is the anchor a user has selected; it normalizes all
//! arithmetic so it always names a real date. The generators project week,
//! month and year pages of [`DayOfCalendar`] records around an anchor for a
//! renderer to draw.
//!
//! Months are 1-based (1 = January) and weekdays run 1 (Monday) to
//! 7 (Sunday) everywhere in this crate.
//!
//! ```
//! use calendar_pages::{CalendarDate, generate_monthly_calendar, Weekday};
//!
//! let mut anchor = CalendarDate::new(2023, 1, 31);
//! anchor.increment_day(35);
//! assert_eq!(anchor.to_tuple(), (2023, 3, 7));
//!
//! let page = generate_monthly_calendar(true, anchor.year(), anchor.month()).unwrap();
//! assert_eq!(page.len(), 42);
//! assert_eq!(page[0].weekday, Weekday::Monday);
//! assert_eq!(page[0].date(), (2023, 2, 27));
//! ```

mod clock;
mod consts;
mod date;
mod day;
mod error;
mod generate;
mod math;
mod names;
mod prelude;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use date::CalendarDate;
pub use day::{DayOfCalendar, build_day};
pub use error::CalendarError;
pub use generate::{generate_monthly_calendar, generate_weekly_calendar, generate_yearly_calendar};
pub use math::{
    date_exists, day_exists, days_in_month, days_in_previous_month, is_leap_year, month_exists, weekday_of,
    weekday_of_first_day_of_month, weekday_of_first_day_of_year, year_exists,
};
pub use names::{Locale, month_name, weekday_name, weekday_names};
pub use types::Weekday;
