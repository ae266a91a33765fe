//! Eurozone holiday calendars: TARGET settlement days plus the Paris,
//! Frankfurt, and Milan markets that compose the EUR joint calendar.

use std::sync::OnceLock;

use super::holiday_set::{HolidaySet, HolidaySetBuilder, Observance};

/// TARGET (Trans-European Automated Real-time Gross settlement)
/// closing days. No weekend substitution.
pub(super) fn target() -> &'static HolidaySet {
    static CALENDAR: OnceLock<HolidaySet> = OnceLock::new();
    CALENDAR.get_or_init(|| {
        HolidaySetBuilder::new("TARGET")
            .fixed(1, 1, Observance::Exact)
            .easter_offset(-2) // Good Friday
            .easter_offset(1) // Easter Monday
            .fixed(5, 1, Observance::Exact) // Labour Day
            .fixed(12, 25, Observance::Exact)
            .fixed(12, 26, Observance::Exact)
            .build()
    })
}

/// Paris business days.
pub(super) fn paris() -> &'static HolidaySet {
    static CALENDAR: OnceLock<HolidaySet> = OnceLock::new();
    CALENDAR.get_or_init(|| {
        HolidaySetBuilder::new("Paris")
            .fixed(1, 1, Observance::Exact)
            .easter_offset(-2) // Good Friday
            .easter_offset(1) // Easter Monday
            .fixed(5, 1, Observance::Exact) // Labour Day
            .fixed(5, 8, Observance::Exact) // Victory Day
            .easter_offset(39) // Ascension
            .easter_offset(50) // Whit Monday
            .fixed(7, 14, Observance::Exact) // Bastille Day
            .fixed(8, 15, Observance::Exact) // Assumption
            .fixed(11, 1, Observance::Exact) // All Saints
            .fixed(11, 11, Observance::Exact) // Armistice Day
            .fixed(12, 25, Observance::Exact)
            .fixed(12, 26, Observance::Exact)
            .build()
    })
}

/// Frankfurt business days.
pub(super) fn frankfurt() -> &'static HolidaySet {
    static CALENDAR: OnceLock<HolidaySet> = OnceLock::new();
    CALENDAR.get_or_init(|| {
        HolidaySetBuilder::new("Frankfurt")
            .fixed(1, 1, Observance::Exact)
            .easter_offset(-2) // Good Friday
            .easter_offset(1) // Easter Monday
            .fixed(5, 1, Observance::Exact) // Labour Day
            .easter_offset(39) // Ascension
            .easter_offset(50) // Whit Monday
            .easter_offset(60) // Corpus Christi
            .fixed(10, 3, Observance::Exact) // German Unity Day
            .fixed(12, 24, Observance::Exact)
            .fixed(12, 25, Observance::Exact)
            .fixed(12, 26, Observance::Exact)
            .fixed(12, 31, Observance::Exact)
            .build()
    })
}

/// Milan business days.
pub(super) fn milan() -> &'static HolidaySet {
    static CALENDAR: OnceLock<HolidaySet> = OnceLock::new();
    CALENDAR.get_or_init(|| {
        HolidaySetBuilder::new("Milan")
            .fixed(1, 1, Observance::Exact)
            .fixed(1, 6, Observance::Exact) // Epiphany
            .easter_offset(1) // Easter Monday
            .fixed(4, 25, Observance::Exact) // Liberation Day
            .fixed(5, 1, Observance::Exact) // Labour Day
            .fixed(6, 2, Observance::Exact) // Republic Day
            .fixed(8, 15, Observance::Exact) // Assumption
            .fixed(11, 1, Observance::Exact) // All Saints
            .fixed(12, 8, Observance::Exact) // Immaculate Conception
            .fixed(12, 24, Observance::Exact)
            .fixed(12, 25, Observance::Exact)
            .fixed(12, 26, Observance::Exact)
            .fixed(12, 31, Observance::Exact)
            .build()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_target_2025() {
        let cal = target();
        assert!(cal.is_holiday(day(2025, 1, 1)));
        assert!(cal.is_holiday(day(2025, 4, 18))); // Good Friday
        assert!(cal.is_holiday(day(2025, 4, 21))); // Easter Monday
        assert!(cal.is_holiday(day(2025, 5, 1)));
        assert!(cal.is_holiday(day(2025, 12, 25)));
        assert!(cal.is_business_day(day(2025, 7, 14))); // Bastille Day is Paris only
    }

    #[test]
    fn test_paris_national_days() {
        let cal = paris();
        assert!(cal.is_holiday(day(2025, 7, 14)));
        assert!(cal.is_holiday(day(2025, 5, 29))); // Ascension
        assert!(cal.is_holiday(day(2025, 6, 9))); // Whit Monday
    }

    #[test]
    fn test_frankfurt_national_days() {
        let cal = frankfurt();
        assert!(cal.is_holiday(day(2025, 10, 3)));
        assert!(cal.is_holiday(day(2025, 6, 19))); // Corpus Christi
        assert!(cal.is_holiday(day(2025, 12, 31)));
    }

    #[test]
    fn test_milan_national_days() {
        let cal = milan();
        assert!(cal.is_holiday(day(2025, 4, 25)));
        assert!(cal.is_holiday(day(2025, 6, 2)));
        assert!(cal.is_holiday(day(2025, 12, 8)));
    }
}
