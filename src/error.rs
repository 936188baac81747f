/// Error type for every fallible operation in the crate.
///
/// Validating entry points (calendar math, the day builder, the generators
/// and name lookup) return these. `CalendarDate` mutators normalize instead
/// and never produce one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The year/month/day combination does not exist.
    #[error("Date {year:04}-{month:02}-{day:02} does not exist")]
    InvalidDate { year: i64, month: i64, day: i64 },

    /// Month outside 1..=12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i64),

    /// Weekday number outside 1..=7.
    #[error("Invalid weekday: {0} (must be 1-7)")]
    InvalidWeekday(i64),

    /// No names are available for this locale tag.
    #[error("Locale not supported: {0}")]
    UnsupportedLocale(String),
}

impl CalendarError {
    pub(crate) fn invalid_date(year: impl Into<i64>, month: impl Into<i64>, day: impl Into<i64>) -> Self {
        Self::InvalidDate {
            year:  year.into(),
            month: month.into(),
            day:   day.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = CalendarError::invalid_date(2023_u32, 2_u8, 30_u8);
        assert_eq!(err.to_string(), "Date 2023-02-30 does not exist");
    }

    #[test]
    fn test_invalid_month_display() {
        assert_eq!(
            CalendarError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
    }

    #[test]
    fn test_unsupported_locale_display() {
        let err = CalendarError::UnsupportedLocale("fr".to_owned());
        assert_eq!(err.to_string(), "Locale not supported: fr");
    }

    #[test]
    fn test_error_is_send_sync_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
