//! Schedule generation configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use cadence_core::calendars::{BusinessDayConvention, Calendar};
use cadence_core::daycounts::DayCountConvention;
use cadence_core::types::{Date, Tenor, TimeUnit};

use crate::error::ScheduleError;

/// Direction in which the date grid is rolled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateGenerationRule {
    /// Anchor at the end date and step backward; any stub lands at the
    /// front of the schedule.
    #[default]
    Backward,
    /// Anchor at the start date and step forward; any stub lands at the
    /// back.
    Forward,
}

impl FromStr for DateGenerationRule {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BACKWARD" => Ok(DateGenerationRule::Backward),
            "FORWARD" => Ok(DateGenerationRule::Forward),
            _ => Err(ScheduleError::invalid_schedule(format!(
                "unknown date generation rule '{s}'"
            ))),
        }
    }
}

/// Configuration for a schedule generation run.
///
/// Built with `new` plus `with_*` setters; unspecified knobs keep
/// market-standard defaults (backward generation, modified following
/// accrual, same-day fixing and payment).
///
/// # Example
///
/// ```rust
/// use cadence_core::prelude::*;
/// use cadence_schedule::ScheduleConfig;
///
/// let config = ScheduleConfig::new(
///     Date::parse("25-05-2025").unwrap(),
///     Date::parse("30-01-2027").unwrap(),
///     "6M".parse().unwrap(),
/// )
/// .with_accrual_calendar("USGS".parse().unwrap())
/// .with_accrual_convention(BusinessDayConvention::Following)
/// .with_fix_in_arrear(true)
/// .with_fixing_offset("1D".parse().unwrap());
///
/// assert!(config.fix_in_arrear);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Unadjusted schedule start.
    pub start: Date,
    /// Unadjusted schedule end.
    pub end: Date,
    /// Coupon period.
    pub period: Tenor,
    /// Calendar governing accrual dates and fixing offsets.
    pub accrual_calendar: Calendar,
    /// Convention for rolling accrual dates.
    pub accrual_convention: BusinessDayConvention,
    /// Day count used for the accrued fraction.
    pub day_count: DayCountConvention,
    /// Grid roll-out direction.
    pub rule: DateGenerationRule,
    /// Keep month-end dates pinned to month-end.
    pub end_of_month: bool,
    /// Fix against the period end instead of the period start.
    pub fix_in_arrear: bool,
    /// Offset from the fixing anchor to the fixing date.
    pub fixing_offset: Tenor,
    /// Offset from the period end to the payment date.
    pub payment_offset: Tenor,
    /// Convention for rolling payment dates.
    pub payment_convention: BusinessDayConvention,
    /// Calendar governing payment offsets.
    pub payment_calendar: Calendar,
}

impl ScheduleConfig {
    /// Creates a configuration with market-standard defaults.
    #[must_use]
    pub fn new(start: Date, end: Date, period: Tenor) -> Self {
        Self {
            start,
            end,
            period,
            accrual_calendar: Calendar::Null,
            accrual_convention: BusinessDayConvention::ModifiedFollowing,
            day_count: DayCountConvention::Simple,
            rule: DateGenerationRule::Backward,
            end_of_month: false,
            fix_in_arrear: false,
            fixing_offset: Tenor::new(0, TimeUnit::Days),
            payment_offset: Tenor::new(0, TimeUnit::Days),
            payment_convention: BusinessDayConvention::Following,
            payment_calendar: Calendar::Null,
        }
    }

    /// Sets the accrual calendar.
    #[must_use]
    pub fn with_accrual_calendar(mut self, calendar: Calendar) -> Self {
        self.accrual_calendar = calendar;
        self
    }

    /// Sets the accrual roll convention.
    #[must_use]
    pub fn with_accrual_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.accrual_convention = convention;
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the grid roll-out direction.
    #[must_use]
    pub fn with_rule(mut self, rule: DateGenerationRule) -> Self {
        self.rule = rule;
        self
    }

    /// Enables or disables the end-of-month rule.
    #[must_use]
    pub fn with_end_of_month(mut self, end_of_month: bool) -> Self {
        self.end_of_month = end_of_month;
        self
    }

    /// Fixes in arrears (against the period end) when set.
    #[must_use]
    pub fn with_fix_in_arrear(mut self, fix_in_arrear: bool) -> Self {
        self.fix_in_arrear = fix_in_arrear;
        self
    }

    /// Sets the fixing offset.
    #[must_use]
    pub fn with_fixing_offset(mut self, offset: Tenor) -> Self {
        self.fixing_offset = offset;
        self
    }

    /// Sets the payment offset.
    #[must_use]
    pub fn with_payment_offset(mut self, offset: Tenor) -> Self {
        self.payment_offset = offset;
        self
    }

    /// Sets the payment roll convention.
    #[must_use]
    pub fn with_payment_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.payment_convention = convention;
        self
    }

    /// Sets the payment calendar.
    #[must_use]
    pub fn with_payment_calendar(mut self, calendar: Calendar) -> Self {
        self.payment_calendar = calendar;
        self
    }
}
