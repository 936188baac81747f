use crate::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week, numbered 1 (Monday) through 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// All weekdays in display order, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Creates a Weekday from its number (1 = Monday .. 7 = Sunday)
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` for numbers outside 1..=7.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        match value {
            1..=7 => Ok(Self::ALL[usize::from(value - 1)]),
            _ => Err(CalendarError::InvalidWeekday(i64::from(value))),
        }
    }

    /// Returns the weekday number (1 = Monday .. 7 = Sunday)
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Saturday and Sunday
    #[inline]
    pub const fn is_weekend(self) -> bool {
        self.get() >= Self::Saturday.get()
    }

    /// The following weekday, wrapping Sunday to Monday
    pub const fn succ(self) -> Self {
        Self::ALL[(self.get() % 7) as usize]
    }

    /// Zero-based position in a Monday-first week
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.get() - 1) as usize
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.get()
    }
}
