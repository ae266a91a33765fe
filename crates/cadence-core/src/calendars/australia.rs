//! Sydney holiday calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

use super::holiday_set::{HolidaySet, HolidaySetBuilder, Observance};

/// Rolls a holiday falling on a weekend forward to Monday.
fn next_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + chrono::Duration::days(2),
        Weekday::Sun => date + chrono::Duration::days(1),
        _ => date,
    }
}

/// Christmas Day and Boxing Day with substitute days past the weekend.
fn christmas_pair(year: i32) -> Vec<NaiveDate> {
    let christmas = NaiveDate::from_ymd_opt(year, 12, 25).expect("valid date");
    let observed_christmas = next_weekday(christmas);
    let boxing = next_weekday(observed_christmas + chrono::Duration::days(1));
    vec![observed_christmas, boxing]
}

/// Sydney (NSW) business days.
pub(super) fn sydney() -> &'static HolidaySet {
    static CALENDAR: OnceLock<HolidaySet> = OnceLock::new();
    CALENDAR.get_or_init(|| {
        HolidaySetBuilder::new("Sydney")
            // New Year's Day, rolled forward past the weekend
            .custom(|year| {
                NaiveDate::from_ymd_opt(year, 1, 1)
                    .map(next_weekday)
                    .into_iter()
                    .collect()
            })
            // Australia Day, rolled forward past the weekend
            .custom(|year| {
                NaiveDate::from_ymd_opt(year, 1, 26)
                    .map(next_weekday)
                    .into_iter()
                    .collect()
            })
            // Good Friday and Easter Monday
            .easter_offset(-2)
            .easter_offset(1)
            // Anzac Day, not substituted
            .fixed(4, 25, Observance::Exact)
            // King's Birthday
            .nth_weekday(6, Weekday::Mon, 2)
            // Bank holiday
            .nth_weekday(8, Weekday::Mon, 1)
            // Labour Day
            .nth_weekday(10, Weekday::Mon, 1)
            // Christmas and Boxing Day with substitutes
            .custom(christmas_pair)
            .build()
    })
}
