//! Metonic cycle, molad of Tishrei and the new-year postponements.

use serde::{Deserialize, Serialize};

use crate::absolute::{AbsoluteDay, Weekday};
use crate::consts::{
    BETUTAKPAT_PARTS, GATARAD_PARTS, LEAP_YEARS_PER_CYCLE, LUNATION_PARTS, MOLAD_EPOCH_DAY,
    MOLAD_EPOCH_PARTS, MOLAD_ZAKEN_PARTS, MONTHS_PER_CYCLE, PARTS_PER_DAY, PARTS_PER_HOUR,
    YEARS_PER_CYCLE,
};

/// Years 3, 6, 8, 11, 14, 17 and 19 of each 19-year cycle carry a thirteenth month.
pub const fn is_hebrew_leap_year(year: i32) -> bool {
    (LEAP_YEARS_PER_CYCLE * year as i64 + 1).rem_euclid(YEARS_PER_CYCLE) < LEAP_YEARS_PER_CYCLE
}

pub const fn months_in_year(year: i32) -> u8 {
    if is_hebrew_leap_year(year) { 13 } else { 12 }
}

/// Months between the molad of Tishrei, year 1, and the molad of Tishrei of `year`.
pub const fn months_elapsed(year: i32) -> i64 {
    (MONTHS_PER_CYCLE * year as i64 - (MONTHS_PER_CYCLE - 1)).div_euclid(YEARS_PER_CYCLE)
}

/// Mean conjunction, as a day and the parts elapsed since that day began at 18:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Molad {
    day: AbsoluteDay,
    parts: i64,
}

impl Molad {
    /// Molad after `months` mean lunations from molad BaHaRaD.
    pub const fn after_months(months: i64) -> Self {
        let total = MOLAD_EPOCH_PARTS + months * LUNATION_PARTS;
        Self {
            day: AbsoluteDay::new(MOLAD_EPOCH_DAY + total.div_euclid(PARTS_PER_DAY)),
            parts: total.rem_euclid(PARTS_PER_DAY),
        }
    }

    pub const fn of_tishrei(year: i32) -> Self {
        Self::after_months(months_elapsed(year))
    }

    pub const fn day(self) -> AbsoluteDay {
        self.day
    }

    /// Parts since 18:00 of the previous civil evening, `0..PARTS_PER_DAY`.
    pub const fn parts(self) -> i64 {
        self.parts
    }

    /// Hours since 18:00 of the previous civil evening.
    pub const fn hours(self) -> i64 {
        self.parts / PARTS_PER_HOUR
    }

    /// Parts into the current hour.
    pub const fn chalakim(self) -> i64 {
        self.parts % PARTS_PER_HOUR
    }

    pub const fn weekday(self) -> Weekday {
        self.day.weekday()
    }
}

/// The four rules (deḥiyyot) that can move 1 Tishrei past the day of its molad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostponementRule {
    /// Molad at or after noon.
    MoladZaken,
    /// Common year, molad on Tuesday at or after 9h 204p.
    Gatarad,
    /// Year following a leap year, molad on Monday at or after 15h 589p.
    Betutakpat,
    /// New year would fall on Sunday, Wednesday or Friday.
    LoAdu,
}

impl PostponementRule {
    /// Days this rule adds on its own.
    pub const fn days(self) -> i64 {
        match self {
            Self::Gatarad => 2,
            Self::MoladZaken | Self::Betutakpat | Self::LoAdu => 1,
        }
    }

    /// The molad-driven rule for `year`, if any. At most one of these can fire.
    pub const fn for_molad(molad: Molad, year: i32) -> Option<Self> {
        if molad.parts >= MOLAD_ZAKEN_PARTS {
            return Some(Self::MoladZaken);
        }
        match molad.weekday() {
            Weekday::Tuesday if molad.parts >= GATARAD_PARTS && !is_hebrew_leap_year(year) => {
                Some(Self::Gatarad)
            }
            Weekday::Monday
                if molad.parts >= BETUTAKPAT_PARTS && is_hebrew_leap_year(year - 1) =>
            {
                Some(Self::Betutakpat)
            }
            _ => None,
        }
    }

    /// Rosh Hashanah never falls on these days.
    pub const fn is_adu(day: Weekday) -> bool {
        matches!(day, Weekday::Sunday | Weekday::Wednesday | Weekday::Friday)
    }
}

/// How 1 Tishrei of a year was fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoshHashanah {
    molad: Molad,
    rule: Option<PostponementRule>,
    lo_adu: bool,
    day: AbsoluteDay,
}

impl RoshHashanah {
    pub const fn of(year: i32) -> Self {
        let molad = Molad::of_tishrei(year);
        let rule = PostponementRule::for_molad(molad, year);
        let day = match rule {
            Some(rule) => molad.day.offset(rule.days()),
            None => molad.day,
        };
        let lo_adu = PostponementRule::is_adu(day.weekday());
        let day = if lo_adu {
            day.offset(PostponementRule::LoAdu.days())
        } else {
            day
        };
        Self {
            molad,
            rule,
            lo_adu,
            day,
        }
    }

    pub const fn molad(&self) -> Molad {
        self.molad
    }

    /// The molad-driven rule that applied, if any.
    pub const fn rule(&self) -> Option<PostponementRule> {
        self.rule
    }

    /// Whether `LoAdu` moved the day after the other rules were applied.
    pub const fn lo_adu(&self) -> bool {
        self.lo_adu
    }

    /// Days between the molad and the new year, 0..=2.
    pub const fn delay(&self) -> i64 {
        self.day.days_since(self.molad.day)
    }

    pub const fn day(&self) -> AbsoluteDay {
        self.day
    }
}

/// Absolute day of 1 Tishrei of `year`.
pub const fn new_year(year: i32) -> AbsoluteDay {
    RoshHashanah::of(year).day
}
