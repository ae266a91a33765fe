//! Actual/Actual ISDA day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA.
///
/// The period is split at calendar-year boundaries, each slice divided
/// by the actual length of its year (365 or 366), and the pieces summed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start == end {
            return Decimal::ZERO;
        }
        if end < start {
            return -self.year_fraction(end, start);
        }

        let mut total = Decimal::ZERO;
        let mut current = start;

        // Whole slices up to each Dec 31 / Jan 1 boundary
        while current.year() < end.year() {
            let next_year_start =
                Date::from_ymd(current.year() + 1, 1, 1).expect("Jan 1 always exists");
            let days = current.days_between(&next_year_start);
            total += Decimal::from(days) / Decimal::from(current.days_in_year());
            current = next_year_start;
        }

        // Remainder within the final year
        if current < end {
            let days = current.days_between(&end);
            total += Decimal::from(days) / Decimal::from(current.days_in_year());
        }

        total
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
