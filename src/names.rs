//! Localized month and weekday names for rendering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::math::month_exists;
use crate::prelude::*;
use crate::{CalendarError, Weekday};

/// Locales with name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    #[display(fmt = "ru")]
    Ru,
    #[display(fmt = "en")]
    En,
}

const RU_MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];
const RU_WEEKDAYS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const EN_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

impl Locale {
    /// Display name of a month (1 = January).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if month is outside 1..=12.
    pub fn month_name(self, month: u8) -> Result<&'static str, CalendarError> {
        if !month_exists(month) {
            return Err(CalendarError::InvalidMonth(i64::from(month)));
        }
        let months = match self {
            Self::Ru => &RU_MONTHS,
            Self::En => &EN_MONTHS,
        };
        Ok(months[usize::from(month - 1)])
    }

    /// Short weekday names, Monday first
    pub const fn weekday_names(self) -> [&'static str; 7] {
        match self {
            Self::Ru => RU_WEEKDAYS,
            Self::En => EN_WEEKDAYS,
        }
    }

    pub const fn weekday_name(self, weekday: Weekday) -> &'static str {
        self.weekday_names()[weekday.index()]
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    /// Matches on the primary language subtag, ignoring case and region:
    /// `"ru"`, `"ru-RU"` and `"RU_ru"` all select Russian.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            _ => Err(CalendarError::UnsupportedLocale(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

/// Month name for a locale tag.
///
/// # Errors
/// Returns `CalendarError::UnsupportedLocale` for an unknown tag and
/// `CalendarError::InvalidMonth` for a month outside 1..=12.
pub fn month_name(month: u8, locale: &str) -> Result<&'static str, CalendarError> {
    locale.parse::<Locale>()?.month_name(month)
}

/// Weekday names for a locale tag, Monday first.
///
/// # Errors
/// Returns `CalendarError::UnsupportedLocale` for an unknown tag.
pub fn weekday_names(locale: &str) -> Result<[&'static str; 7], CalendarError> {
    Ok(locale.parse::<Locale>()?.weekday_names())
}

/// Weekday name for a locale tag.
///
/// # Errors
/// Returns `CalendarError::UnsupportedLocale` for an unknown tag.
pub fn weekday_name(weekday: Weekday, locale: &str) -> Result<&'static str, CalendarError> {
    Ok(locale.parse::<Locale>()?.weekday_name(weekday))
}
