//! Date type for calendar and schedule calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{CadenceError, CadenceResult};

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// operations the calendar and schedule engines need, plus strict
/// `DD-MM-YYYY` token parsing. A `Date` is immutable once constructed
/// and always names a real calendar day.
///
/// # Example
///
/// ```rust
/// use cadence_core::types::Date;
///
/// let date = Date::parse("25-05-2025").unwrap();
/// assert_eq!(date.year(), 2025);
/// assert_eq!(date.to_string(), "25-05-2025");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidCalendarDate` if the components do
    /// not name a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CadenceResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Date).ok_or_else(|| {
            CadenceError::invalid_calendar_date(format!("{day:02}-{month:02}-{year:04}"))
        })
    }

    /// Parses a strict `DD-MM-YYYY` token.
    ///
    /// The structural pattern (two digits, dash, two digits, dash, four
    /// digits, month in 1..=12, day literal in 1..=31) is checked first
    /// and fails with `InvalidDateFormat`; a structurally valid token
    /// whose day exceeds the month's length (leap years included) fails
    /// with `InvalidCalendarDate`.
    pub fn parse(token: &str) -> CadenceResult<Self> {
        let bytes = token.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[2] == b'-'
            && bytes[5] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !shape_ok {
            return Err(CadenceError::invalid_date_format(token));
        }

        // The digit check above guarantees these parses succeed.
        let day: u32 = token[0..2].parse().unwrap_or(0);
        let month: u32 = token[3..5].parse().unwrap_or(0);
        let year: i32 = token[6..10].parse().unwrap_or(0);

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(CadenceError::invalid_date_format(token));
        }
        if day > days_in_month(year, month) {
            return Err(CadenceError::invalid_calendar_date(format!(
                "{token}: day exceeds month length"
            )));
        }

        Self::from_ymd(year, month, day)
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    #[must_use]
    pub fn add_months(&self, months: i32) -> Self {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        // Clamp day to valid range for new month
        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Date(
            NaiveDate::from_ymd_opt(new_year, new_month, new_day)
                .expect("clamped day is always valid"),
        )
    }

    /// Adds a number of years to the date, clamping Feb 29 as needed.
    #[must_use]
    pub fn add_years(&self, years: i32) -> Self {
        let new_year = self.year() + years;
        let max_day = days_in_month(new_year, self.month());
        let new_day = self.day().min(max_day);

        Date(
            NaiveDate::from_ymd_opt(new_year, self.month(), new_day)
                .expect("clamped day is always valid"),
        )
    }

    /// Calculates the signed number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the last calendar day of the month containing this date.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), self.days_in_month())
                .expect("end of month should always be valid"),
        )
    }

    /// Checks if the date is the last calendar day of its month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}-{:04}",
            self.day(),
            self.month(),
            self.year()
        )
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Helper function to get days in a month for a given year.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Helper function to check if a year is a leap year.
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
