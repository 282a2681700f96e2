//! Gregorian to Hebrew calendar conversion for small watch-face displays.
//!
//! The conversion runs in two pure, allocation-free steps:
//!
//! ```
//! use hebrew_date::{GregorianDate, HebrewMonth, absolute_day_to_hebrew_date, gregorian_to_absolute_day};
//!
//! let day = gregorian_to_absolute_day(GregorianDate::from_ymd(2024, 1, 1));
//! let date = absolute_day_to_hebrew_date(day);
//!
//! assert_eq!((date.day(), date.month(), date.year()), (20, HebrewMonth::Tevet, 5784));
//! ```
//!
//! Supported range: Gregorian years 1..=9999 (Hebrew 3761..=13760).

mod absolute;
mod consts;
pub mod face;
mod hebrew;
pub mod labels;
mod molad;
mod prelude;
mod types;

pub use absolute::{AbsoluteDay, Weekday, absolute_day_to_gregorian, gregorian_to_absolute_day};
pub use consts::*;
pub use hebrew::{
    HebrewDate, HebrewMonth, HebrewYear, YearKind, absolute_day_to_hebrew_date,
    hebrew_to_absolute_day,
};
pub use molad::{
    Molad, PostponementRule, RoshHashanah, is_hebrew_leap_year, months_elapsed, months_in_year,
    new_year,
};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A proleptic Gregorian calendar date.
///
/// Ordering follows (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month", "day")]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[error("Empty date string")]
    EmptyInput,
    #[error("{month} does not occur in Hebrew year {year}")]
    InvalidHebrewMonth { year: i32, month: HebrewMonth },
    #[error("Invalid day {day} for {month} {year}")]
    InvalidHebrewDay {
        year: i32,
        month: HebrewMonth,
        day: u8,
    },
}

impl GregorianDate {
    /// Builds a date without validation. Any (1..=31, 1..=12, year) combination
    /// converts without panicking; see [`gregorian_to_absolute_day`].
    pub const fn from_ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Builds a date, checking it against the calendar and the supported range.
    ///
    /// # Errors
    /// `InvalidYear`, `InvalidMonth` or `InvalidDay` for the first bad component.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self::from_ymd(year.get(), month.get(), day.get()))
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The following day.
    #[must_use]
    pub fn succ(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self::from_ymd(self.year, self.month, self.day + 1)
        } else if self.month == DECEMBER {
            Self::from_ymd(self.year + 1, JANUARY, MIN_DAY)
        } else {
            Self::from_ymd(self.year, self.month + 1, MIN_DAY)
        }
    }

    pub fn to_absolute_day(self) -> AbsoluteDay {
        gregorian_to_absolute_day(self)
    }

    pub fn to_hebrew(self) -> HebrewDate {
        absolute_day_to_hebrew_date(gregorian_to_absolute_day(self))
    }

    pub fn weekday(self) -> Weekday {
        gregorian_to_absolute_day(self).weekday()
    }
}

impl From<chrono::NaiveDate> for GregorianDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        // chrono keeps month in 1..=12 and day in 1..=31
        Self::from_ymd(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Strictly enforce delimiters: DATE_SEPARATOR for ISO, MONTH_FIRST_SEPARATOR for month-first
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(DateError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        let (separator, parts): (char, Vec<&str>) = if has_hyphen {
            (DATE_SEPARATOR, trimmed.split(DATE_SEPARATOR).map(str::trim).collect())
        } else if has_slash {
            (
                MONTH_FIRST_SEPARATOR,
                trimmed.split(MONTH_FIRST_SEPARATOR).map(str::trim).collect(),
            )
        } else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY-MM-DD or MM/DD/YYYY, found {trimmed}"
            )));
        };

        let [first, second, third] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        };

        // ISO is year-first, the slash form is month-first
        let (year, month, day) = if separator == DATE_SEPARATOR {
            (first, second, third)
        } else {
            (third, first, second)
        };
        Self::new(parse_number(year)?, parse_number(month)?, parse_number(day)?)
    }
}

/// Parses one numeric component, reporting the token on failure
fn parse_number<T: FromStr>(s: &str) -> Result<T, DateError> {
    s.parse::<T>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
