//! Bitmap-backed holiday sets for O(1) lookups.
//!
//! Each market calendar is a bitmap with one bit per day across the
//! supported year range, populated once from its holiday rules and then
//! queried in constant time.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Minimum year supported by the calendars.
pub const MIN_YEAR: i32 = 1970;
/// Maximum year supported by the calendars.
pub const MAX_YEAR: i32 = 2100;

/// Total number of years in the supported range.
const YEAR_COUNT: usize = (MAX_YEAR - MIN_YEAR + 1) as usize;

/// Maximum days per year (leap year).
const MAX_DAYS_PER_YEAR: usize = 366;

/// Total bits needed for the entire date range.
const TOTAL_BITS: usize = YEAR_COUNT * MAX_DAYS_PER_YEAR;

/// Number of u64 words needed to store all bits.
const WORD_COUNT: usize = TOTAL_BITS.div_ceil(64);

/// How a rule-generated holiday that lands on a weekend is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Observance {
    /// The holiday stays on its nominal date.
    #[default]
    Exact,
    /// Sunday holidays move to Monday; Saturday holidays are not
    /// substituted (US government-securities style).
    SundayToMonday,
    /// Saturday holidays move to Friday, Sunday holidays to Monday
    /// (US settlement style).
    NearestWeekday,
}

impl Observance {
    fn observed(&self, date: NaiveDate) -> NaiveDate {
        match (self, date.weekday()) {
            (Observance::Exact, _) => date,
            (_, Weekday::Sun) => date.succ_opt().unwrap_or(date),
            (Observance::NearestWeekday, Weekday::Sat) => date.pred_opt().unwrap_or(date),
            _ => date,
        }
    }
}

/// Holiday set with bitmap storage.
///
/// Weekends (Saturday and Sunday) are handled directly in
/// `is_business_day` and never stored as bits.
///
/// # Performance
///
/// - `is_holiday()`: O(1)
/// - `is_business_day()`: O(1)
/// - Memory usage: ~6KB per calendar
#[derive(Clone)]
pub struct HolidaySet {
    /// Name of the calendar
    name: &'static str,
    /// Each bit represents a day, 1 = holiday, 0 = not holiday
    bits: Box<[u64; WORD_COUNT]>,
}

impl std::fmt::Debug for HolidaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidaySet")
            .field("name", &self.name)
            .field("holiday_count", &self.count_holidays())
            .finish()
    }
}

impl HolidaySet {
    /// Creates a new empty holiday set.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            bits: Box::new([0u64; WORD_COUNT]),
        }
    }

    /// Creates a holiday set from explicit dates.
    pub fn from_holidays(name: &'static str, holidays: &HashSet<NaiveDate>) -> Self {
        let mut set = Self::new(name);
        for &date in holidays {
            set.add_holiday(date);
        }
        set
    }

    /// Returns the name of this calendar.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Marks a date as a holiday.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        if let Some((word_idx, bit_idx)) = Self::date_to_indices(date) {
            self.bits[word_idx] |= 1u64 << bit_idx;
        }
    }

    /// Checks if a date is a listed holiday (weekends excluded).
    #[inline]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        if let Some((word_idx, bit_idx)) = Self::date_to_indices(date) {
            (self.bits[word_idx] & (1u64 << bit_idx)) != 0
        } else {
            false
        }
    }

    /// Checks if a date is a business day: neither a weekend nor a
    /// listed holiday.
    #[inline]
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return false;
        }
        !self.is_holiday(date)
    }

    /// Counts the listed holidays.
    pub fn count_holidays(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Converts a date to bitmap indices.
    ///
    /// Returns (word_index, bit_index) or None if the date is out of range.
    #[inline]
    fn date_to_indices(date: NaiveDate) -> Option<(usize, usize)> {
        let year = date.year();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }

        let year_offset = (year - MIN_YEAR) as usize;
        let day_of_year = date.ordinal0() as usize;

        let bit_position = year_offset * MAX_DAYS_PER_YEAR + day_of_year;
        Some((bit_position / 64, bit_position % 64))
    }
}

/// Builder assembling a holiday set from rule-based definitions.
pub struct HolidaySetBuilder {
    name: &'static str,
    holidays: HashSet<NaiveDate>,
    start_year: i32,
    end_year: i32,
}

impl HolidaySetBuilder {
    /// Creates a new builder covering the full supported year range.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            holidays: HashSet::new(),
            start_year: MIN_YEAR,
            end_year: MAX_YEAR,
        }
    }

    /// Restricts the year range for generated holidays.
    #[cfg(test)]
    pub fn year_range(mut self, start: i32, end: i32) -> Self {
        self.start_year = start.max(MIN_YEAR);
        self.end_year = end.min(MAX_YEAR);
        self
    }

    /// Adds a fixed holiday (same month/day every year) with the given
    /// weekend observance.
    pub fn fixed(mut self, month: u32, day: u32, observance: Observance) -> Self {
        for year in self.start_year..=self.end_year {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                self.holidays.insert(observance.observed(date));
            }
        }
        self
    }

    /// Adds a fixed holiday observed only from a given year onward.
    pub fn fixed_from(mut self, month: u32, day: u32, from_year: i32, observance: Observance) -> Self {
        for year in from_year.max(self.start_year)..=self.end_year {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                self.holidays.insert(observance.observed(date));
            }
        }
        self
    }

    /// Adds the nth occurrence of a weekday in a month.
    pub fn nth_weekday(mut self, month: u32, weekday: Weekday, occurrence: u32) -> Self {
        for year in self.start_year..=self.end_year {
            if let Some(date) = nth_weekday_of_month(year, month, weekday, occurrence) {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// Adds the last occurrence of a weekday in a month.
    pub fn last_weekday(mut self, month: u32, weekday: Weekday) -> Self {
        for year in self.start_year..=self.end_year {
            if let Some(date) = last_weekday_of_month(year, month, weekday) {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// Adds a holiday at a fixed offset from Easter Sunday.
    pub fn easter_offset(mut self, offset_days: i64) -> Self {
        for year in self.start_year..=self.end_year {
            if let Some(easter) = easter_sunday(year) {
                if let Some(date) = easter.checked_add_signed(chrono::Duration::days(offset_days)) {
                    self.holidays.insert(date);
                }
            }
        }
        self
    }

    /// Adds holidays from a per-year generator function.
    pub fn custom<F>(mut self, generator: F) -> Self
    where
        F: Fn(i32) -> Vec<NaiveDate>,
    {
        for year in self.start_year..=self.end_year {
            self.holidays.extend(generator(year));
        }
        self
    }

    /// Builds the holiday set.
    pub fn build(self) -> HolidaySet {
        HolidaySet::from_holidays(self.name, &self.holidays)
    }
}

/// Calculates the nth occurrence of a weekday in a month.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_weekday = first_of_month.weekday();

    let days_until = (weekday.num_days_from_monday() as i32
        - first_weekday.num_days_from_monday() as i32)
        .rem_euclid(7) as u32;

    let day = 1 + days_until + (n - 1) * 7;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Calculates the last occurrence of a weekday in a month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last_day = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?.pred_opt()?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
    };

    let last_weekday = last_day.weekday();
    let days_back = (last_weekday.num_days_from_monday() as i32
        - weekday.num_days_from_monday() as i32)
        .rem_euclid(7);

    last_day.checked_sub_signed(chrono::Duration::days(days_back as i64))
}

/// Calculates Easter Sunday using the Anonymous Gregorian algorithm.
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_basic() {
        let mut set = HolidaySet::new("Test");

        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(!set.is_holiday(date));

        set.add_holiday(date);
        assert!(set.is_holiday(date));
        assert!(!set.is_business_day(date));
    }

    #[test]
    fn test_weekend_check() {
        let set = HolidaySet::new("Test");

        let saturday = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();

        assert!(!set.is_business_day(saturday));
        assert!(!set.is_business_day(sunday));
        assert!(set.is_business_day(monday));
    }

    #[test]
    fn test_out_of_range_is_not_holiday() {
        let set = HolidaySet::new("Test");
        let ancient = NaiveDate::from_ymd_opt(1950, 1, 2).unwrap();
        assert!(!set.is_holiday(ancient));
        assert!(set.is_business_day(ancient));
    }

    #[test]
    fn test_nth_weekday() {
        // 3rd Monday of January 2025
        let date = nth_weekday_of_month(2025, 1, Weekday::Mon, 3).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
    }

    #[test]
    fn test_last_weekday() {
        // Last Monday of May 2025 (Memorial Day)
        let date = last_weekday_of_month(2025, 5, Weekday::Mon).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 5, 26).unwrap());
    }

    #[test]
    fn test_easter() {
        let easter = easter_sunday(2025).unwrap();
        assert_eq!(easter, NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());

        let easter = easter_sunday(2024).unwrap();
        assert_eq!(easter, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn test_observance_policies() {
        // July 4, 2026 is a Saturday
        let sat = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        assert_eq!(Observance::Exact.observed(sat), sat);
        assert_eq!(Observance::SundayToMonday.observed(sat), sat);
        assert_eq!(
            Observance::NearestWeekday.observed(sat),
            NaiveDate::from_ymd_opt(2026, 7, 3).unwrap()
        );

        // July 4, 2027 is a Sunday
        let sun = NaiveDate::from_ymd_opt(2027, 7, 4).unwrap();
        let monday = NaiveDate::from_ymd_opt(2027, 7, 5).unwrap();
        assert_eq!(Observance::SundayToMonday.observed(sun), monday);
        assert_eq!(Observance::NearestWeekday.observed(sun), monday);
    }

    #[test]
    fn test_builder() {
        let calendar = HolidaySetBuilder::new("Test")
            .year_range(2025, 2025)
            .fixed(1, 1, Observance::SundayToMonday)
            .last_weekday(5, Weekday::Mon)
            .build();

        assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 5, 26).unwrap()));
        assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 5, 27).unwrap()));
    }
}
