//! 30/360 day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// 30/360 bond basis.
///
/// A start day of 31 is truncated to 30; an end day of 31 is truncated
/// to 30 only when the (truncated) start day is 30.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 && d1 >= 30 {
            d2 = 30;
        }

        let years = (end.year() - start.year()) as i64;
        let months = end.month() as i64 - start.month() as i64;

        360 * years + 30 * months + (d2 - d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_year() {
        let dc = Thirty360;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();
        assert_eq!(dc.day_count(start, end), 360);
        assert_eq!(dc.year_fraction(start, end), dec!(1));
    }

    #[test]
    fn test_start_day_31_truncated() {
        let dc = Thirty360;
        let start = Date::from_ymd(2025, 1, 31).unwrap();
        let end = Date::from_ymd(2025, 2, 28).unwrap();
        // d1 31 -> 30: 30*1 + (28 - 30) = 28
        assert_eq!(dc.day_count(start, end), 28);
    }

    #[test]
    fn test_end_day_31_conditional() {
        let dc = Thirty360;

        // Start on the 31st: both truncate, 31 Jan -> 31 Mar is 60
        let start = Date::from_ymd(2025, 1, 31).unwrap();
        let end = Date::from_ymd(2025, 3, 31).unwrap();
        assert_eq!(dc.day_count(start, end), 60);

        // Start mid-month: the end-of-month 31 is kept
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        let end = Date::from_ymd(2025, 3, 31).unwrap();
        assert_eq!(dc.day_count(start, end), 76);
    }

    #[test]
    fn test_february_not_special() {
        let dc = Thirty360;
        // Feb 28 is not padded to 30
        let start = Date::from_ymd(2025, 2, 28).unwrap();
        let end = Date::from_ymd(2025, 3, 31).unwrap();
        assert_eq!(dc.day_count(start, end), 33);
    }
}
