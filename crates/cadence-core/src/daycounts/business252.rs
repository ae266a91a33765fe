//! Business/252 day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::calendars::Calendar;
use crate::types::Date;

/// Business days over a 252-day year, counted against a calendar.
#[derive(Debug, Clone)]
pub struct Business252 {
    calendar: Calendar,
}

impl Business252 {
    /// Creates the convention over the given calendar.
    #[must_use]
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }
}

impl DayCount for Business252 {
    fn name(&self) -> &'static str {
        "BUSINESS252"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(252)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        self.calendar.business_days_between(start, end)
    }
}
