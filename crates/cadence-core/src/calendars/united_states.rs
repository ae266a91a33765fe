//! US holiday calendars.

use chrono::Weekday;
use std::sync::OnceLock;

use super::holiday_set::{HolidaySet, HolidaySetBuilder, Observance};

/// Floating Federal holidays shared by both US calendars.
fn federal_floating(builder: HolidaySetBuilder) -> HolidaySetBuilder {
    builder
        // Martin Luther King Jr. Day
        .nth_weekday(1, Weekday::Mon, 3)
        // Washington's Birthday
        .nth_weekday(2, Weekday::Mon, 3)
        // Memorial Day
        .last_weekday(5, Weekday::Mon)
        // Labor Day
        .nth_weekday(9, Weekday::Mon, 1)
        // Columbus Day
        .nth_weekday(10, Weekday::Mon, 2)
        // Thanksgiving
        .nth_weekday(11, Weekday::Thu, 4)
}

/// Fixed Federal holidays with a per-market observance policy.
fn federal_fixed(builder: HolidaySetBuilder, observance: Observance) -> HolidaySetBuilder {
    builder
        // New Year's Day
        .fixed(1, 1, observance)
        // Juneteenth, observed since 2021
        .fixed_from(6, 19, 2021, observance)
        // Independence Day
        .fixed(7, 4, observance)
        // Veterans Day
        .fixed(11, 11, observance)
        // Christmas Day
        .fixed(12, 25, observance)
}

/// US government securities market (Federal Reserve schedule).
///
/// Saturday holidays are not substituted; Sunday holidays move to
/// Monday.
pub(super) fn government_securities() -> &'static HolidaySet {
    static CALENDAR: OnceLock<HolidaySet> = OnceLock::new();
    CALENDAR.get_or_init(|| {
        let builder = HolidaySetBuilder::new("US Government Securities");
        federal_floating(federal_fixed(builder, Observance::SundayToMonday)).build()
    })
}

/// US settlement calendar (nearest-weekday observance, so Saturday
/// holidays are taken on Friday).
pub(super) fn settlement() -> &'static HolidaySet {
    static CALENDAR: OnceLock<HolidaySet> = OnceLock::new();
    CALENDAR.get_or_init(|| {
        let builder = HolidaySetBuilder::new("US Settlement");
        federal_floating(federal_fixed(builder, Observance::NearestWeekday)).build()
    })
}
