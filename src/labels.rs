//! Static label tables for the watch face.
//!
//! Two fixed label sets exist: Hebrew script and a Latin transliteration.
//! Lookups outside a table's range return `None` instead of panicking.

use serde::{Deserialize, Serialize};

use crate::absolute::Weekday;
use crate::hebrew::HebrewMonth;

/// Hebrew letter numerals 1..=30. Fifteen and sixteen are written טו and טז,
/// never as the letters of the divine name.
pub const HEBREW_NUMERALS: [&str; 30] = [
    "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט", "י", //
    "יא", "יב", "יג", "יד", "טו", "טז", "יז", "יח", "יט", "כ", //
    "כא", "כב", "כג", "כד", "כה", "כו", "כז", "כח", "כט", "ל",
];

const LATIN_NUMERALS: [&str; 30] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", //
    "11", "12", "13", "14", "15", "16", "17", "18", "19", "20", //
    "21", "22", "23", "24", "25", "26", "27", "28", "29", "30",
];

/// Indexed by [`HebrewMonth::index`].
const HEBREW_MONTH_NAMES: [&str; 14] = [
    "תשרי",
    "חשון",
    "כסלו",
    "טבת",
    "שבט",
    "אדר",
    "אדר א׳",
    "אדר ב׳",
    "ניסן",
    "אייר",
    "סיון",
    "תמוז",
    "אב",
    "אלול",
];

const LATIN_MONTH_NAMES: [&str; 14] = [
    "Tishrei", "Cheshvan", "Kislev", "Tevet", "Shevat", "Adar", "Adar I", "Adar II", "Nisan",
    "Iyar", "Sivan", "Tammuz", "Av", "Elul",
];

/// Sunday first.
const HEBREW_WEEKDAY_NAMES: [&str; 7] = ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"];

const LATIN_WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Index 0 unused, January = 1.
const HEBREW_GREGORIAN_MONTH_NAMES: [&str; 13] = [
    "", "ינואר", "פברואר", "מרץ", "אפריל", "מאי", "יוני", "יולי", "אוגוסט", "ספטמבר", "אוקטובר",
    "נובמבר", "דצמבר",
];

const LATIN_GREGORIAN_MONTH_NAMES: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Clock-face hour labels, clockwise from the top (12, 1, 2, ... 11).
pub const HOUR_LABELS: [&str; 12] = [
    "יב", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט", "י", "יא",
];

/// The letter numeral for `n`, 1..=30.
pub fn hebrew_numeral(n: u8) -> Option<&'static str> {
    HEBREW_NUMERALS.get(usize::from(n).checked_sub(1)?).copied()
}

/// Which script the face labels are drawn in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSet {
    #[default]
    Hebrew,
    Latin,
}

impl LabelSet {
    /// Day-of-month label, 1..=30.
    pub fn day_numeral(self, day: u8) -> Option<&'static str> {
        let table = match self {
            Self::Hebrew => &HEBREW_NUMERALS,
            Self::Latin => &LATIN_NUMERALS,
        };
        table.get(usize::from(day).checked_sub(1)?).copied()
    }

    pub const fn month_name(self, month: HebrewMonth) -> &'static str {
        match self {
            Self::Hebrew => HEBREW_MONTH_NAMES[month.index()],
            Self::Latin => LATIN_MONTH_NAMES[month.index()],
        }
    }

    pub const fn weekday_name(self, weekday: Weekday) -> &'static str {
        match self {
            Self::Hebrew => HEBREW_WEEKDAY_NAMES[weekday.index() as usize],
            Self::Latin => LATIN_WEEKDAY_NAMES[weekday.index() as usize],
        }
    }

    /// Gregorian month label, January = 1.
    pub fn gregorian_month_name(self, month: u8) -> Option<&'static str> {
        let table = match self {
            Self::Hebrew => &HEBREW_GREGORIAN_MONTH_NAMES,
            Self::Latin => &LATIN_GREGORIAN_MONTH_NAMES,
        };
        match month {
            0 => None,
            _ => table.get(usize::from(month)).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hebrew_numerals() {
        assert_eq!(hebrew_numeral(1), Some("א"));
        assert_eq!(hebrew_numeral(10), Some("י"));
        assert_eq!(hebrew_numeral(20), Some("כ"));
        assert_eq!(hebrew_numeral(30), Some("ל"));
        assert_eq!(hebrew_numeral(0), None);
        assert_eq!(hebrew_numeral(31), None);
    }

    #[test]
    fn test_fifteen_and_sixteen_avoid_the_divine_name() {
        assert_eq!(hebrew_numeral(15), Some("טו"));
        assert_eq!(hebrew_numeral(16), Some("טז"));
        assert!(HEBREW_NUMERALS.iter().all(|n| *n != "יה" && *n != "יו"));
    }

    #[test]
    fn test_label_sets() {
        assert_eq!(LabelSet::Latin.day_numeral(15), Some("15"));
        assert_eq!(LabelSet::Hebrew.day_numeral(15), Some("טו"));
        assert_eq!(LabelSet::Latin.month_name(HebrewMonth::AdarII), "Adar II");
        assert_eq!(LabelSet::Hebrew.month_name(HebrewMonth::Tevet), "טבת");
        assert_eq!(LabelSet::Latin.weekday_name(Weekday::Monday), "Mon");
        assert_eq!(LabelSet::Hebrew.weekday_name(Weekday::Saturday), "שבת");
        assert_eq!(LabelSet::Latin.gregorian_month_name(1), Some("Jan"));
        assert_eq!(LabelSet::Hebrew.gregorian_month_name(12), Some("דצמבר"));
        assert_eq!(LabelSet::Latin.gregorian_month_name(0), None);
        assert_eq!(LabelSet::Latin.gregorian_month_name(13), None);
    }

    #[test]
    fn test_latin_month_names_match_display() {
        for month in HebrewMonth::ALL {
            assert_eq!(LabelSet::Latin.month_name(month), month.to_string());
        }
    }

    #[test]
    fn test_hour_labels_follow_numerals() {
        assert_eq!(HOUR_LABELS[0], HEBREW_NUMERALS[11]);
        for hour in 1..12 {
            assert_eq!(HOUR_LABELS[hour], HEBREW_NUMERALS[hour - 1]);
        }
    }

    #[test]
    fn test_label_set_serde() {
        assert_eq!(serde_json::to_string(&LabelSet::Latin).unwrap(), r#""latin""#);
        let parsed: LabelSet = serde_json::from_str(r#""hebrew""#).unwrap();
        assert_eq!(parsed, LabelSet::Hebrew);
    }
}
