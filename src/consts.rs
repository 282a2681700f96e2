/// Smallest supported Gregorian year (inclusive)
pub const MIN_YEAR: i32 = 1;
/// Largest supported Gregorian year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// Largest day number any Gregorian month can carry
pub const MAX_DAY: u8 = 31;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days of a common year elapsed before the first of each month (1-indexed).
pub const DAYS_BEFORE_MONTH: [u16; 13] = {
    let mut table = [0u16; 13];
    let mut month = 2;
    while month <= MAX_MONTH as usize {
        table[month] = table[month - 1] + DAYS_IN_MONTH[month - 1] as u16;
        month += 1;
    }
    table
};

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

pub(crate) const DAYS_PER_COMMON_YEAR: i64 = 365;
/// Days in four years, one of them leap
pub(crate) const DAYS_PER_QUADRENNIUM: i64 = 1461;
/// Days in a century that does not end on a 400-year boundary
pub(crate) const DAYS_PER_CENTURY: i64 = 36_524;
/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

/// Absolute day number of 31 December, year 0 (proleptic Gregorian).
/// 1 January of year 1 is therefore JDN 1 721 426.
pub const GREGORIAN_EPOCH_OFFSET: i64 = 1_721_425;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';

// Hebrew time units. A day is counted from 18:00 of the previous civil evening.

/// Parts (ḥalakim) in one hour
pub const PARTS_PER_HOUR: i64 = 1080;
/// Parts in one day
pub const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;
/// Mean synodic month: 29 days, 12 hours, 793 parts
pub const LUNATION_PARTS: i64 = 29 * PARTS_PER_DAY + 12 * PARTS_PER_HOUR + 793;

/// Months in one Metonic cycle
pub const MONTHS_PER_CYCLE: i64 = 235;
/// Years in one Metonic cycle
pub const YEARS_PER_CYCLE: i64 = 19;
/// Leap years in one Metonic cycle
pub const LEAP_YEARS_PER_CYCLE: i64 = 7;

/// Absolute day of the molad of Tishrei, year 1 (BaHaRaD: Monday)
pub const MOLAD_EPOCH_DAY: i64 = 347_998;
/// Time of day of molad BaHaRaD: 5 hours, 204 parts
pub const MOLAD_EPOCH_PARTS: i64 = 5 * PARTS_PER_HOUR + 204;

/// Molad at or after noon moves the new year one day (molad zaken)
pub const MOLAD_ZAKEN_PARTS: i64 = 18 * PARTS_PER_HOUR;
/// Tuesday threshold for common years (GaTaRaD): 9 hours, 204 parts
pub const GATARAD_PARTS: i64 = 9 * PARTS_PER_HOUR + 204;
/// Monday threshold after a leap year (BeTUTaKPaT): 15 hours, 589 parts
pub const BETUTAKPAT_PARTS: i64 = 15 * PARTS_PER_HOUR + 589;

/// Hebrew year containing 1 January of Gregorian year 1
pub const MIN_HEBREW_YEAR: i32 = 3761;
/// Hebrew year containing 31 December of Gregorian year 9999
pub const MAX_HEBREW_YEAR: i32 = 13760;

/// Upper bound on year-estimate corrections in one conversion
pub const MAX_YEAR_CORRECTIONS: u8 = 2;

/// Full turn in watch-face angle units
pub const TRIG_MAX_ANGLE: u32 = 0x10000;
