//! Tokyo holiday calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

use super::holiday_set::{HolidaySet, HolidaySetBuilder, Observance};

/// Vernal equinox day, approximated for 1970-2100.
fn vernal_equinox(year: i32) -> Option<NaiveDate> {
    let shift = ((year - 1980) as f64 * 0.242194 + 20.8431).floor() as i32 - (year - 1980) / 4;
    NaiveDate::from_ymd_opt(year, 3, shift as u32)
}

/// Autumnal equinox day, approximated for 1970-2100.
fn autumnal_equinox(year: i32) -> Option<NaiveDate> {
    let shift = ((year - 1980) as f64 * 0.242194 + 23.2488).floor() as i32 - (year - 1980) / 4;
    NaiveDate::from_ymd_opt(year, 9, shift as u32)
}

/// Sunday holidays are taken on the following Monday.
fn with_substitute(date: NaiveDate) -> Vec<NaiveDate> {
    if date.weekday() == Weekday::Sun {
        vec![date, date + chrono::Duration::days(1)]
    } else {
        vec![date]
    }
}

/// Tokyo business days.
pub(super) fn tokyo() -> &'static HolidaySet {
    static CALENDAR: OnceLock<HolidaySet> = OnceLock::new();
    CALENDAR.get_or_init(|| {
        HolidaySetBuilder::new("Tokyo")
            // New Year break: markets stay closed Dec 31 through Jan 3
            .fixed(12, 31, Observance::Exact)
            .fixed(1, 1, Observance::Exact)
            .fixed(1, 2, Observance::Exact)
            .fixed(1, 3, Observance::Exact)
            // Coming of Age Day
            .nth_weekday(1, Weekday::Mon, 2)
            // National Foundation Day
            .fixed(2, 11, Observance::SundayToMonday)
            // Emperor's Birthday (Naruhito era)
            .fixed_from(2, 23, 2020, Observance::SundayToMonday)
            // Vernal Equinox Day
            .custom(|year| {
                vernal_equinox(year)
                    .map(with_substitute)
                    .unwrap_or_default()
            })
            // Showa Day
            .fixed(4, 29, Observance::SundayToMonday)
            // Constitution Memorial Day, Greenery Day, Children's Day.
            // When one of the three falls on a Sunday the substitute
            // day is May 6, past the whole block.
            .fixed(5, 3, Observance::Exact)
            .fixed(5, 4, Observance::Exact)
            .fixed(5, 5, Observance::Exact)
            .custom(|year| {
                let block_has_sunday = (3..=5).any(|d| {
                    NaiveDate::from_ymd_opt(year, 5, d)
                        .is_some_and(|date| date.weekday() == Weekday::Sun)
                });
                if block_has_sunday {
                    NaiveDate::from_ymd_opt(year, 5, 6).into_iter().collect()
                } else {
                    Vec::new()
                }
            })
            // Marine Day
            .nth_weekday(7, Weekday::Mon, 3)
            // Mountain Day
            .fixed_from(8, 11, 2016, Observance::SundayToMonday)
            // Respect for the Aged Day
            .nth_weekday(9, Weekday::Mon, 3)
            // Autumnal Equinox Day
            .custom(|year| {
                autumnal_equinox(year)
                    .map(with_substitute)
                    .unwrap_or_default()
            })
            // Sports Day
            .nth_weekday(10, Weekday::Mon, 2)
            // Culture Day
            .fixed(11, 3, Observance::SundayToMonday)
            // Labor Thanksgiving Day
            .fixed(11, 23, Observance::SundayToMonday)
            .build()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_year_break() {
        let cal = tokyo();
        assert!(cal.is_holiday(day(2025, 1, 1)));
        assert!(cal.is_holiday(day(2025, 1, 2)));
        assert!(cal.is_holiday(day(2025, 1, 3)));
        assert!(cal.is_holiday(day(2024, 12, 31)));
    }

    #[test]
    fn test_equinoxes_2025() {
        assert_eq!(vernal_equinox(2025).unwrap(), day(2025, 3, 20));
        assert_eq!(autumnal_equinox(2025).unwrap(), day(2025, 9, 23));
        assert!(tokyo().is_holiday(day(2025, 3, 20)));
        assert!(tokyo().is_holiday(day(2025, 9, 23)));
    }

    #[test]
    fn test_golden_week_2025() {
        let cal = tokyo();
        assert!(cal.is_holiday(day(2025, 4, 29)));
        assert!(cal.is_holiday(day(2025, 5, 5)));
        // May 4, 2025 is a Sunday; substitute on Tuesday May 6
        assert!(cal.is_holiday(day(2025, 5, 6)));
    }

    #[test]
    fn test_regular_day_open() {
        assert!(tokyo().is_business_day(day(2025, 6, 10)));
    }
}
