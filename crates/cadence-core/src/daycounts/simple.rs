//! Simple day count, the default when none is specified.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual calendar days over a flat 365-day year.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple;

impl DayCount for Simple {
    fn name(&self) -> &'static str {
        "Simple"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
