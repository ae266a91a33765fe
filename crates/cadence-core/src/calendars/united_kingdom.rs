//! UK bank holiday calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

use super::holiday_set::{HolidaySet, HolidaySetBuilder};

/// Rolls a fixed holiday forward past the weekend, UK style.
fn next_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + chrono::Duration::days(2),
        Weekday::Sun => date + chrono::Duration::days(1),
        _ => date,
    }
}

/// Christmas Day and Boxing Day with substitute days.
///
/// When either falls on a weekend the pair occupies the first two
/// weekdays from December 25.
fn christmas_pair(year: i32) -> Vec<NaiveDate> {
    let christmas = NaiveDate::from_ymd_opt(year, 12, 25).expect("valid date");
    let observed_christmas = next_weekday(christmas);
    let mut boxing = observed_christmas + chrono::Duration::days(1);
    boxing = next_weekday(boxing);
    vec![observed_christmas, boxing]
}

/// London Stock Exchange business days.
pub(super) fn london_exchange() -> &'static HolidaySet {
    static CALENDAR: OnceLock<HolidaySet> = OnceLock::new();
    CALENDAR.get_or_init(|| {
        HolidaySetBuilder::new("London Exchange")
            // New Year's Day, rolled forward past the weekend
            .custom(|year| {
                NaiveDate::from_ymd_opt(year, 1, 1)
                    .map(next_weekday)
                    .into_iter()
                    .collect()
            })
            // Good Friday and Easter Monday
            .easter_offset(-2)
            .easter_offset(1)
            // Early May bank holiday
            .nth_weekday(5, Weekday::Mon, 1)
            // Spring bank holiday
            .last_weekday(5, Weekday::Mon)
            // Summer bank holiday
            .last_weekday(8, Weekday::Mon)
            // Christmas and Boxing Day with substitutes
            .custom(christmas_pair)
            // Royal and jubilee one-offs
            .custom(|year| {
                let one_offs: &[(i32, u32, u32)] = &[
                    (2011, 4, 29),  // royal wedding
                    (2012, 6, 5),   // Diamond Jubilee
                    (2022, 6, 3),   // Platinum Jubilee
                    (2022, 9, 19),  // state funeral
                    (2023, 5, 8),   // coronation
                ];
                one_offs
                    .iter()
                    .filter(|(y, _, _)| *y == year)
                    .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
                    .collect()
            })
            .build()
    })
}
