//! Day count conventions.
//!
//! Day count conventions determine how accrued interest is calculated
//! by specifying how to count days between two dates and the year basis.
//!
//! All year fractions are signed: swapping the dates negates the result.

mod act360;
mod act365;
mod actact;
mod business252;
mod simple;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::ActActIsda;
pub use business252::Business252;
pub use simple::Simple;
pub use thirty360::Thirty360;

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::calendars::Calendar;
use crate::error::CadenceError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// # Implementation Notes
///
/// - `year_fraction` returns the signed fraction of a year between dates
/// - `day_count` returns the number of days according to the convention
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative when `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates per the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// # Example
///
/// ```rust
/// use cadence_core::calendars::Calendar;
/// use cadence_core::daycounts::DayCountConvention;
/// use cadence_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let convention: DayCountConvention = "ACT/360".parse().unwrap();
/// let dc = convention.to_day_count(&Calendar::Null);
///
/// let start = Date::parse("27-05-2025").unwrap();
/// let end = Date::parse("30-07-2025").unwrap();
/// assert_eq!(dc.year_fraction(start, end), dec!(64) / dec!(360));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/365 over actual calendar days, the `NONE` default.
    Simple,
    /// Actual/360 - money market convention.
    Act360,
    /// Actual/365 Fixed.
    Act365Fixed,
    /// Actual/Actual ISDA - calendar-year split.
    ActActIsda,
    /// 30/360 bond basis with the 31st-to-30th truncation rules.
    Thirty360,
    /// Business days / 252, computed against a calendar.
    Business252,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    ///
    /// The calendar is only consulted by `Business252`; the other
    /// conventions count calendar days.
    #[must_use]
    pub fn to_day_count(&self, calendar: &Calendar) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Simple => Box::new(Simple),
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
            DayCountConvention::ActActIsda => Box::new(ActActIsda),
            DayCountConvention::Thirty360 => Box::new(Thirty360),
            DayCountConvention::Business252 => Box::new(Business252::new(calendar.clone())),
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Simple => "Simple",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365",
            DayCountConvention::ActActIsda => "ACT/ACT",
            DayCountConvention::Thirty360 => "30/360",
            DayCountConvention::Business252 => "BUSINESS252",
        }
    }

    /// Returns all supported conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Simple,
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::ActActIsda,
            DayCountConvention::Thirty360,
            DayCountConvention::Business252,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = CadenceError;

    /// Parses a day count token. `NONE` resolves to `Simple`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().trim() {
            "NONE" | "SIMPLE" => Ok(DayCountConvention::Simple),
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "ACT/365" | "ACT/365F" | "ACTUAL/365" | "ACT365" => {
                Ok(DayCountConvention::Act365Fixed)
            }
            "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTACT" => Ok(DayCountConvention::ActActIsda),
            "30/360" | "30E/360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            "BUSINESS252" | "BUS/252" | "BU/252" => Ok(DayCountConvention::Business252),
            _ => Err(CadenceError::UnsupportedDayCount {
                token: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_token_resolution() {
        assert_eq!(
            "NONE".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Simple
        );
        assert_eq!(
            "act/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365Fixed
        );
        assert_eq!(
            "ACT/ACT".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActActIsda
        );
        assert_eq!(
            "30/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360
        );
        assert_eq!(
            "BUSINESS252".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Business252
        );
        assert!(matches!(
            "ACT/364".parse::<DayCountConvention>(),
            Err(CadenceError::UnsupportedDayCount { .. })
        ));
    }

    #[test]
    fn test_all_conventions_compute() {
        let calendar = Calendar::Null;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 7, 1).unwrap();

        for convention in DayCountConvention::all() {
            let dc = convention.to_day_count(&calendar);
            let yf = dc.year_fraction(start, end);
            assert!(
                yf > dec!(0.4) && yf < dec!(0.8),
                "{} gave {}",
                dc.name(),
                yf
            );
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.name().parse().unwrap();
            assert_eq!(*convention, parsed);
        }
    }
}
