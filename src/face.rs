//! Per-tick state of an analog watch face that shows the Hebrew date.
//!
//! The face itself (layers, fonts, drawing) lives with the caller. A
//! [`FaceContext`] owned by the caller's refresh loop turns the host clock's
//! current time into a [`Frame`]: the label strings and hand angles to draw.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::GregorianDate;
use crate::absolute::{AbsoluteDay, gregorian_to_absolute_day};
use crate::consts::TRIG_MAX_ANGLE;
use crate::hebrew::{HebrewDate, HebrewYear, absolute_day_to_hebrew_date};
use crate::labels::{HOUR_LABELS, LabelSet};

const LATIN_HOUR_LABELS: [&str; 12] = [
    "12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11",
];

/// Face settings. Every field has a default, so an empty document is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaceConfig {
    /// Script for the date and hour labels
    pub labels: LabelSet,
    /// Draw the second hand
    pub show_seconds: bool,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            labels: LabelSet::Hebrew,
            show_seconds: true,
        }
    }
}

/// Hand angles in `TRIG_MAX_ANGLE` units, clockwise from 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hands {
    pub hour: u32,
    pub minute: u32,
    pub second: Option<u32>,
}

impl Hands {
    /// The hour hand moves in steps of ten minutes.
    pub const fn at(hour: u32, minute: u32, second: u32, show_seconds: bool) -> Self {
        Self {
            hour: TRIG_MAX_ANGLE * ((hour % 12) * 6 + minute / 10) / (12 * 6),
            minute: TRIG_MAX_ANGLE * minute / 60,
            second: if show_seconds {
                Some(TRIG_MAX_ANGLE * second / 60)
            } else {
                None
            },
        }
    }
}

/// Everything the renderer needs for one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub date: HebrewDate,
    pub hebrew_day: &'static str,
    pub hebrew_month: &'static str,
    pub weekday: &'static str,
    /// Gregorian day of month
    pub day_of_month: u32,
    pub hands: Hands,
}

/// Caller-owned face state. Caches the current day and Hebrew year so a
/// refresh within the same day does no calendar work.
#[derive(Debug, Clone)]
pub struct FaceContext {
    config: FaceConfig,
    year: Option<HebrewYear>,
    today: Option<(AbsoluteDay, HebrewDate)>,
}

impl FaceContext {
    pub const fn new(config: FaceConfig) -> Self {
        Self {
            config,
            year: None,
            today: None,
        }
    }

    pub const fn config(&self) -> FaceConfig {
        self.config
    }

    /// Hour labels clockwise from the top.
    pub const fn hour_labels(&self) -> [&'static str; 12] {
        match self.config.labels {
            LabelSet::Hebrew => HOUR_LABELS,
            LabelSet::Latin => LATIN_HOUR_LABELS,
        }
    }

    /// Hebrew date of `day`, reusing the cached year when it still applies.
    pub fn hebrew_date(&mut self, day: AbsoluteDay) -> HebrewDate {
        if let Some((cached, date)) = self.today {
            if cached == day {
                return date;
            }
        }

        let date = self
            .year
            .and_then(|year| year.date_of(day))
            .unwrap_or_else(|| absolute_day_to_hebrew_date(day));
        if self.year != Some(date.hebrew_year()) {
            debug!(
                year = date.year(),
                length = date.year_length(),
                "entered hebrew year"
            );
        }
        debug!(%date, %day, "hebrew date changed");

        self.year = Some(date.hebrew_year());
        self.today = Some((day, date));
        date
    }

    /// Builds the frame for `now`, read from the host clock.
    pub fn refresh(&mut self, now: NaiveDateTime) -> Frame {
        let (hour, minute, second) = (now.hour(), now.minute(), now.second());
        trace!(hour, minute, second, "face refresh");

        let day = gregorian_to_absolute_day(GregorianDate::from(now.date()));
        let date = self.hebrew_date(day);
        let labels = self.config.labels;

        Frame {
            date,
            hebrew_day: labels.day_numeral(date.day()).unwrap_or_default(),
            hebrew_month: labels.month_name(date.month()),
            weekday: labels.weekday_name(day.weekday()),
            day_of_month: now.day(),
            hands: Hands::at(hour, minute, second, self.config.show_seconds),
        }
    }
}

impl Default for FaceContext {
    fn default() -> Self {
        Self::new(FaceConfig::default())
    }
}
