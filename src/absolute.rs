//! Absolute day numbers and the Gregorian side of the conversion.
//!
//! An [`AbsoluteDay`] is a civil Julian Day Number: a plain count of days in
//! which 1 January 2000 is day 2 451 545. Both calendars in this crate meet
//! on this number line.

use serde::{Deserialize, Serialize};

use crate::GregorianDate;
use crate::consts::{
    DAYS_PER_CENTURY, DAYS_PER_COMMON_YEAR, DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_QUADRENNIUM,
    GREGORIAN_EPOCH_OFFSET, MAX_DAY, MAX_MONTH, MIN_DAY,
};
use crate::prelude::*;
use crate::types::{days_before_month, is_leap_year};

/// Continuous day count shared by the Gregorian and Hebrew calendars.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct AbsoluteDay(i64);

impl AbsoluteDay {
    pub const fn new(day: i64) -> Self {
        Self(day)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The day `days` after this one (before it, if negative).
    #[inline]
    #[must_use]
    pub const fn offset(self, days: i64) -> Self {
        Self(self.0 + days)
    }

    /// Signed number of days from `earlier` to `self`.
    #[inline]
    pub const fn days_since(self, earlier: Self) -> i64 {
        self.0 - earlier.0
    }

    pub const fn weekday(self) -> Weekday {
        // JDN 0 was a Monday
        match (self.0 + 1).rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

/// Day of the week, numbered from Sunday as in the Hebrew week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Position in the week, Sunday = 0.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Converts a civil date to its absolute day number.
///
/// Closed form, no iteration. The caller supplies a valid date: month and day
/// ranges are checked in debug builds only. A day past the end of its month
/// (Feb 30) yields the number of the day it overflows into.
pub fn gregorian_to_absolute_day(date: GregorianDate) -> AbsoluteDay {
    debug_assert!(
        (1..=MAX_MONTH).contains(&date.month()),
        "month {} out of range",
        date.month()
    );
    debug_assert!(
        (MIN_DAY..=MAX_DAY).contains(&date.day()),
        "day {} out of range",
        date.day()
    );

    let year = date.year();
    let elapsed_years = i64::from(year) - 1;
    let leap_days =
        elapsed_years.div_euclid(4) - elapsed_years.div_euclid(100) + elapsed_years.div_euclid(400);
    let month = date.month().clamp(1, MAX_MONTH);

    AbsoluteDay(
        GREGORIAN_EPOCH_OFFSET
            + DAYS_PER_COMMON_YEAR * elapsed_years
            + leap_days
            + i64::from(days_before_month(year, month))
            + i64::from(date.day()),
    )
}

/// Gregorian year containing `day`.
fn gregorian_year(day: AbsoluteDay) -> i32 {
    let d0 = day.0 - GREGORIAN_EPOCH_OFFSET - 1;
    let n400 = d0.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let d1 = d0.rem_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let n100 = d1 / DAYS_PER_CENTURY;
    let d2 = d1 % DAYS_PER_CENTURY;
    let n4 = d2 / DAYS_PER_QUADRENNIUM;
    let d3 = d2 % DAYS_PER_QUADRENNIUM;
    let n1 = d3 / DAYS_PER_COMMON_YEAR;

    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // the last day of a leap cycle belongs to the year already counted
    let year = if n100 == 4 || n1 == 4 { year } else { year + 1 };
    i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}

/// Inverse of [`gregorian_to_absolute_day`], also closed form.
pub fn absolute_day_to_gregorian(day: AbsoluteDay) -> GregorianDate {
    let year = gregorian_year(day);
    let new_year = gregorian_to_absolute_day(GregorianDate::from_ymd(year, 1, 1));
    let march_first = gregorian_to_absolute_day(GregorianDate::from_ymd(year, 3, 1));

    let correction = if day < march_first {
        0
    } else if is_leap_year(year) {
        1
    } else {
        2
    };
    let prior_days = day.days_since(new_year);
    // fits 1..=12 for any day inside `year`
    let month = ((12 * (prior_days + correction) + 373) / 367).clamp(1, 12) as u8;

    let first_of_month = gregorian_to_absolute_day(GregorianDate::from_ymd(year, month, 1));
    let day_of_month = (day.days_since(first_of_month) + 1).clamp(1, i64::from(MAX_DAY)) as u8;
    GregorianDate::from_ymd(year, month, day_of_month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jd(year: i32, month: u8, day: u8) -> i64 {
        gregorian_to_absolute_day(GregorianDate::from_ymd(year, month, day)).get()
    }

    #[test]
    fn test_known_julian_day_numbers() {
        assert_eq!(jd(2000, 1, 1), 2_451_545);
        assert_eq!(jd(1, 1, 1), 1_721_426);
        assert_eq!(jd(1970, 1, 1), 2_440_588);
        assert_eq!(jd(1858, 11, 17), 2_400_001);
        assert_eq!(jd(2024, 1, 1), 2_460_311);
    }

    #[test]
    fn test_leap_day_counts() {
        assert_eq!(jd(2024, 3, 1) - jd(2024, 2, 28), 2);
        assert_eq!(jd(2023, 3, 1) - jd(2023, 2, 28), 1);
        assert_eq!(jd(1900, 3, 1) - jd(1900, 2, 28), 1);
        assert_eq!(jd(2000, 3, 1) - jd(2000, 2, 28), 2);
        assert_eq!(jd(2001, 1, 1) - jd(2000, 1, 1), 366);
        assert_eq!(jd(1901, 1, 1) - jd(1900, 1, 1), 365);
    }

    #[test]
    fn test_overflowing_day_rolls_into_next_month() {
        assert_eq!(jd(2023, 2, 30), jd(2023, 3, 2));
        assert_eq!(jd(2023, 4, 31), jd(2023, 5, 1));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(AbsoluteDay::new(jd(2000, 1, 1)).weekday(), Weekday::Saturday);
        assert_eq!(AbsoluteDay::new(jd(2024, 1, 1)).weekday(), Weekday::Monday);
        assert_eq!(AbsoluteDay::new(jd(2023, 9, 16)).weekday(), Weekday::Saturday);
        assert_eq!(AbsoluteDay::new(0).weekday(), Weekday::Monday);
        assert_eq!(Weekday::Wednesday.index(), 3);
    }

    #[test]
    fn test_inverse_on_boundaries() {
        let dates = [
            (1, 1, 1),
            (1899, 12, 31),
            (1900, 2, 28),
            (1900, 3, 1),
            (2000, 2, 29),
            (2000, 12, 31),
            (2024, 3, 1),
            (2100, 12, 31),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = GregorianDate::from_ymd(y, m, d);
            assert_eq!(absolute_day_to_gregorian(gregorian_to_absolute_day(date)), date);
        }
    }

    #[test]
    fn test_inverse_walks_every_day_of_a_leap_cycle() {
        let start = jd(1999, 12, 31);
        let mut expected = GregorianDate::from_ymd(1999, 12, 31);
        for offset in 0..DAYS_PER_QUADRENNIUM * 2 {
            let date = absolute_day_to_gregorian(AbsoluteDay::new(start + offset));
            assert_eq!(date, expected, "offset {offset}");
            expected = expected.succ();
        }
    }

    #[test]
    fn test_display_and_serde() {
        let day = AbsoluteDay::new(2_460_311);
        assert_eq!(day.to_string(), "2460311");
        assert_eq!(serde_json::to_string(&day).unwrap(), "2460311");
        let parsed: AbsoluteDay = serde_json::from_str("2460311").unwrap();
        assert_eq!(parsed, day);
        let raw: i64 = day.into();
        assert_eq!(AbsoluteDay::from(raw), day);
    }
}
