//! End-to-end Gregorian to Hebrew conversion tests.

use hebrew_date::{
    AbsoluteDay, GregorianDate, HebrewDate, HebrewMonth, HebrewYear, YearKind,
    absolute_day_to_hebrew_date, gregorian_to_absolute_day, hebrew_to_absolute_day,
    is_hebrew_leap_year,
};

fn hebrew(year: i32, month: u8, day: u8) -> HebrewDate {
    GregorianDate::from_ymd(year, month, day).to_hebrew()
}

/// `next` is exactly one Hebrew day after `prev`.
fn assert_follows(prev: &HebrewDate, next: &HebrewDate) {
    let same_month = next.year() == prev.year()
        && next.month_of_year() == prev.month_of_year()
        && next.day() == prev.day() + 1;
    let next_month = next.year() == prev.year()
        && next.month_of_year() == prev.month_of_year() + 1
        && next.day() == 1;
    let next_year = next.year() == prev.year() + 1
        && next.month_of_year() == 1
        && next.day() == 1
        && next.year_start() == prev.next_year_start();
    assert!(
        same_month || next_month || next_year,
        "{prev} is followed by {next}"
    );
}

fn walk(first: GregorianDate, last: GregorianDate) {
    let mut gregorian = first;
    let mut prev_day = gregorian_to_absolute_day(gregorian);
    let mut prev = absolute_day_to_hebrew_date(prev_day);
    while gregorian < last {
        gregorian = gregorian.succ();
        let day = gregorian_to_absolute_day(gregorian);
        assert_eq!(day.days_since(prev_day), 1, "{gregorian}");
        let date = absolute_day_to_hebrew_date(day);
        assert_follows(&prev, &date);
        assert!(
            YearKind::from_length(date.year_length()).is_some(),
            "{date} has a {} day year",
            date.year_length()
        );
        prev_day = day;
        prev = date;
    }
}

#[test]
fn consecutive_days_never_skip_or_repeat() {
    walk(
        GregorianDate::from_ymd(1780, 1, 1),
        GregorianDate::from_ymd(2220, 12, 31),
    );
}

#[test]
fn consecutive_days_at_range_edges() {
    walk(GregorianDate::from_ymd(1, 1, 1), GregorianDate::from_ymd(3, 12, 31));
    walk(
        GregorianDate::from_ymd(9997, 1, 1),
        GregorianDate::from_ymd(9999, 12, 31),
    );
}

#[test]
fn range_edges_convert() {
    let first = hebrew(1, 1, 1);
    assert_eq!((first.day(), first.month(), first.year()), (18, HebrewMonth::Tevet, 3761));

    let last = hebrew(9999, 12, 31);
    assert_eq!(
        (last.day(), last.month(), last.year()),
        (28, HebrewMonth::Cheshvan, 13760)
    );
}

#[test]
fn known_fixed_points() {
    let cases = [
        ((2024, 1, 1), (20, HebrewMonth::Tevet, 5784)),
        ((1899, 12, 31), (29, HebrewMonth::Tevet, 5660)),
        ((1900, 1, 1), (1, HebrewMonth::Shevat, 5660)),
        ((2000, 2, 29), (23, HebrewMonth::AdarI, 5760)),
        ((2023, 10, 17), (2, HebrewMonth::Cheshvan, 5784)),
        ((2024, 3, 24), (14, HebrewMonth::AdarII, 5784)),
        ((2024, 10, 3), (1, HebrewMonth::Tishrei, 5785)),
        ((2025, 1, 1), (1, HebrewMonth::Tevet, 5785)),
    ];
    for ((y, m, d), expected) in cases {
        let date = hebrew(y, m, d);
        assert_eq!(
            (date.day(), date.month(), date.year()),
            expected,
            "{y}-{m:02}-{d:02}"
        );
    }
}

#[test]
fn year_5784_is_a_leap_year_with_adar_two() {
    let date = hebrew(2024, 9, 3);
    assert_eq!(date.year(), 5784);
    let year = date.hebrew_year();
    assert_eq!(year.month_sequence().len(), 13);
    assert!(year.month_sequence().contains(&HebrewMonth::AdarII));
    assert_eq!(
        year.months()
            .filter(|(month, _)| *month == HebrewMonth::AdarII)
            .map(|(_, length)| length)
            .next(),
        Some(29)
    );
}

#[test]
fn leap_cycle_has_seven_thirteen_month_years() {
    // 5776 is the last year of a cycle, so 5777 starts one
    for cycle_start in (5777..6500).step_by(19) {
        let thirteen = (cycle_start..cycle_start + 19)
            .filter(|&year| HebrewYear::of(year).month_sequence().len() == 13)
            .count();
        assert_eq!(thirteen, 7, "cycle starting {cycle_start}");
        assert!(is_hebrew_leap_year(cycle_start + 18));
    }
}

#[test]
fn absolute_day_is_strictly_increasing() {
    let mut date = GregorianDate::from_ymd(1599, 1, 1);
    let mut prev = gregorian_to_absolute_day(date);
    while date < GregorianDate::from_ymd(2401, 12, 31) {
        date = date.succ();
        let day = gregorian_to_absolute_day(date);
        assert!(day > prev, "{date}");
        prev = day;
    }
}

#[test]
fn hebrew_round_trip_through_absolute_day() {
    let start = gregorian_to_absolute_day(GregorianDate::from_ymd(2020, 1, 1));
    for offset in 0..3000 {
        let day = start.offset(offset);
        let date = absolute_day_to_hebrew_date(day);
        assert_eq!(
            hebrew_to_absolute_day(date.year(), date.month(), date.day()),
            Ok(day)
        );
    }
}

#[test]
fn concurrent_callers_agree() {
    let days: Vec<AbsoluteDay> = (0..2000)
        .map(|i| AbsoluteDay::new(2_400_000 + i * 37))
        .collect();
    let expected: Vec<HebrewDate> = days.iter().map(|&d| absolute_day_to_hebrew_date(d)).collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (day, want) in days.iter().zip(&expected) {
                    assert_eq!(absolute_day_to_hebrew_date(*day), *want);
                }
            });
        }
    });
}
