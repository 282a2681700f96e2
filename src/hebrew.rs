//! Hebrew years, months and the absolute-day to Hebrew-date conversion.

use serde::{Deserialize, Serialize};

use crate::DateError;
use crate::absolute::AbsoluteDay;
use crate::consts::{
    LUNATION_PARTS, MAX_YEAR_CORRECTIONS, MOLAD_EPOCH_DAY, MONTHS_PER_CYCLE, PARTS_PER_DAY,
    YEARS_PER_CYCLE,
};
use crate::molad::{is_hebrew_leap_year, new_year};
use crate::prelude::*;

/// Named Hebrew months. `Adar` belongs to common years, `AdarI` and `AdarII` to leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum HebrewMonth {
    #[display(fmt = "Tishrei")]
    Tishrei,
    #[display(fmt = "Cheshvan")]
    Cheshvan,
    #[display(fmt = "Kislev")]
    Kislev,
    #[display(fmt = "Tevet")]
    Tevet,
    #[display(fmt = "Shevat")]
    Shevat,
    #[display(fmt = "Adar")]
    Adar,
    #[display(fmt = "Adar I")]
    AdarI,
    #[display(fmt = "Adar II")]
    AdarII,
    #[display(fmt = "Nisan")]
    Nisan,
    #[display(fmt = "Iyar")]
    Iyar,
    #[display(fmt = "Sivan")]
    Sivan,
    #[display(fmt = "Tammuz")]
    Tammuz,
    #[display(fmt = "Av")]
    Av,
    #[display(fmt = "Elul")]
    Elul,
}

const COMMON_YEAR_MONTHS: [HebrewMonth; 12] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

const LEAP_YEAR_MONTHS: [HebrewMonth; 13] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::AdarI,
    HebrewMonth::AdarII,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

impl HebrewMonth {
    /// Every month, in table order (`index()` order).
    pub const ALL: [Self; 14] = [
        Self::Tishrei,
        Self::Cheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shevat,
        Self::Adar,
        Self::AdarI,
        Self::AdarII,
        Self::Nisan,
        Self::Iyar,
        Self::Sivan,
        Self::Tammuz,
        Self::Av,
        Self::Elul,
    ];

    /// Position in `ALL` and in the month-name tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Length of this month in a year of the given kind.
    pub const fn length(self, kind: YearKind) -> u8 {
        match self {
            Self::Cheshvan => match kind {
                YearKind::Complete => 30,
                YearKind::Deficient | YearKind::Regular => 29,
            },
            Self::Kislev => match kind {
                YearKind::Deficient => 29,
                YearKind::Regular | YearKind::Complete => 30,
            },
            Self::Tishrei | Self::Shevat | Self::AdarI | Self::Nisan | Self::Sivan | Self::Av => 30,
            Self::Tevet
            | Self::Adar
            | Self::AdarII
            | Self::Iyar
            | Self::Tammuz
            | Self::Elul => 29,
        }
    }
}

/// Whether Cheshvan and Kislev are short or long, as fixed by the year length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearKind {
    /// 353 or 383 days: Cheshvan and Kislev both have 29
    Deficient,
    /// 354 or 384 days: Cheshvan 29, Kislev 30
    Regular,
    /// 355 or 385 days: both have 30
    Complete,
}

impl YearKind {
    /// `None` for any length a Hebrew year cannot have.
    pub const fn from_length(days: i64) -> Option<Self> {
        match days {
            353 | 383 => Some(Self::Deficient),
            354 | 384 => Some(Self::Regular),
            355 | 385 => Some(Self::Complete),
            _ => None,
        }
    }
}

/// Closed-form guess at the year containing `day`, from the mean lunation.
/// Can be off by one near a year boundary.
fn estimate_year(day: AbsoluteDay) -> i32 {
    let lunations = (day.get() - MOLAD_EPOCH_DAY)
        .saturating_mul(PARTS_PER_DAY)
        .div_euclid(LUNATION_PARTS);
    // largest year whose first month starts within `lunations`
    let year = (YEARS_PER_CYCLE * lunations + MONTHS_PER_CYCLE + YEARS_PER_CYCLE - 2)
        .div_euclid(MONTHS_PER_CYCLE);
    year.clamp(i64::from(i32::MIN), i64::from(i32::MAX - 2)) as i32
}

/// A Hebrew year and its bounds on the absolute day line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HebrewYear {
    year: i32,
    start: AbsoluteDay,
    next_start: AbsoluteDay,
}

impl HebrewYear {
    pub const fn of(year: i32) -> Self {
        Self {
            year,
            start: new_year(year),
            next_start: new_year(year + 1),
        }
    }

    /// The year whose `[start, next_start)` contains `day`.
    pub fn containing(day: AbsoluteDay) -> Self {
        Self::locate(day).0
    }

    /// Like [`containing`](Self::containing), also reporting how many one-year
    /// corrections the estimate needed.
    pub(crate) fn locate(day: AbsoluteDay) -> (Self, u8) {
        let mut year = Self::of(estimate_year(day));
        let mut corrections = 0;
        while corrections < MAX_YEAR_CORRECTIONS {
            year = if day < year.start {
                year.previous()
            } else if day >= year.next_start {
                year.next()
            } else {
                break;
            };
            corrections += 1;
        }
        debug_assert!(year.contains(day), "{day} not bracketed by year {}", year.year);
        (year, corrections)
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        Self {
            year: self.year - 1,
            start: new_year(self.year - 1),
            next_start: self.start,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            year: self.year + 1,
            start: self.next_start,
            next_start: new_year(self.year + 2),
        }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    /// Absolute day of 1 Tishrei.
    pub const fn start(self) -> AbsoluteDay {
        self.start
    }

    /// Absolute day of 1 Tishrei of the following year.
    pub const fn next_start(self) -> AbsoluteDay {
        self.next_start
    }

    pub const fn length(self) -> i64 {
        self.next_start.days_since(self.start)
    }

    pub const fn is_leap(self) -> bool {
        is_hebrew_leap_year(self.year)
    }

    pub fn kind(self) -> YearKind {
        YearKind::from_length(self.length()).unwrap_or(YearKind::Regular)
    }

    pub fn contains(self, day: AbsoluteDay) -> bool {
        self.start <= day && day < self.next_start
    }

    /// Months of this year in calendar order, Tishrei first.
    pub const fn month_sequence(self) -> &'static [HebrewMonth] {
        if self.is_leap() {
            &LEAP_YEAR_MONTHS
        } else {
            &COMMON_YEAR_MONTHS
        }
    }

    /// Each month of the year with its length.
    pub fn months(self) -> impl Iterator<Item = (HebrewMonth, u8)> {
        let kind = self.kind();
        self.month_sequence()
            .iter()
            .map(move |&month| (month, month.length(kind)))
    }

    /// Days from 1 Tishrei to the first of `month`, if the month occurs this year.
    pub fn days_before(self, month: HebrewMonth) -> Option<i64> {
        let mut elapsed = 0;
        for (candidate, length) in self.months() {
            if candidate == month {
                return Some(elapsed);
            }
            elapsed += i64::from(length);
        }
        None
    }

    /// The Hebrew date of `day`, if it falls inside this year.
    pub fn date_of(self, day: AbsoluteDay) -> Option<HebrewDate> {
        self.contains(day).then(|| self.date_at(day.days_since(self.start)))
    }

    /// Walks the month lengths to the `offset`-th day of the year.
    fn date_at(self, offset: i64) -> HebrewDate {
        let mut remaining = offset.clamp(0, self.length() - 1);
        let mut month = HebrewMonth::Tishrei;
        let mut month_of_year = 0;
        for (candidate, length) in self.months() {
            month = candidate;
            month_of_year += 1;
            if remaining < i64::from(length) {
                break;
            }
            remaining -= i64::from(length);
        }
        HebrewDate {
            day: (remaining + 1) as u8,
            month,
            month_of_year,
            year: self,
        }
    }
}

/// A day of the Hebrew calendar, with the bounds of its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{} {} {}", "day", "month", "year.year")]
pub struct HebrewDate {
    day: u8,
    month: HebrewMonth,
    month_of_year: u8,
    year: HebrewYear,
}

impl HebrewDate {
    /// Day of month, 1..=30.
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn month(&self) -> HebrewMonth {
        self.month
    }

    /// Position of the month in its year, 1..=13, Tishrei = 1.
    pub const fn month_of_year(&self) -> u8 {
        self.month_of_year
    }

    pub const fn year(&self) -> i32 {
        self.year.year
    }

    pub const fn hebrew_year(&self) -> HebrewYear {
        self.year
    }

    /// Absolute day of 1 Tishrei of this date's year.
    pub const fn year_start(&self) -> AbsoluteDay {
        self.year.start
    }

    /// Absolute day of 1 Tishrei of the following year.
    pub const fn next_year_start(&self) -> AbsoluteDay {
        self.year.next_start
    }

    pub const fn year_length(&self) -> i64 {
        self.year.length()
    }

    pub fn absolute_day(&self) -> AbsoluteDay {
        let before = self.year.days_before(self.month).unwrap_or(0);
        self.year.start.offset(before + i64::from(self.day) - 1)
    }
}

/// Converts an absolute day number to its Hebrew date.
///
/// Constant time: the year comes from a closed-form estimate plus at most
/// `MAX_YEAR_CORRECTIONS` single-year steps, and the month from a walk over at
/// most 13 month lengths.
pub fn absolute_day_to_hebrew_date(day: AbsoluteDay) -> HebrewDate {
    let (year, _) = HebrewYear::locate(day);
    year.date_at(day.days_since(year.start))
}

/// Absolute day of `day` `month` `year`.
///
/// # Errors
/// `InvalidHebrewMonth` if the month does not occur in that year (Adar in a leap
/// year, Adar I or II in a common one), `InvalidHebrewDay` if the day is past the
/// end of the month.
pub fn hebrew_to_absolute_day(
    year: i32,
    month: HebrewMonth,
    day: u8,
) -> Result<AbsoluteDay, DateError> {
    let hebrew_year = HebrewYear::of(year);
    let length = hebrew_year
        .months()
        .find_map(|(candidate, length)| (candidate == month).then_some(length))
        .ok_or(DateError::InvalidHebrewMonth { year, month })?;
    if day == 0 || day > length {
        return Err(DateError::InvalidHebrewDay { year, month, day });
    }
    let before = hebrew_year.days_before(month).unwrap_or(0);
    Ok(hebrew_year.start.offset(before + i64::from(day) - 1))
}
