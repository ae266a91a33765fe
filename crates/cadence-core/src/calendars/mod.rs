//! Business-day calendars.
//!
//! A [`Calendar`] is either the null calendar (every day is a business
//! day), a single market calendar backed by a bitmap holiday set, or a
//! joint composition of other calendars. All date rolling, advancement,
//! and business-day counting goes through this type.

mod australia;
mod conventions;
mod eurozone;
mod holiday_set;
mod japan;
mod united_kingdom;
mod united_states;

pub use conventions::BusinessDayConvention;
pub use holiday_set::{
    easter_sunday, last_weekday_of_month, nth_weekday_of_month, HolidaySet, HolidaySetBuilder,
    Observance, MAX_YEAR, MIN_YEAR,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CadenceError;
use crate::types::{Date, Tenor, TimeUnit};

/// A single market's holiday calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    /// US government securities market (Federal Reserve holidays,
    /// Sunday-to-Monday observance only).
    UsGovernmentSecurities,
    /// US settlement (Federal holidays with nearest-weekday observance).
    UsSettlement,
    /// London Stock Exchange / UK bank holidays.
    LondonExchange,
    /// Tokyo.
    Tokyo,
    /// Sydney.
    Sydney,
    /// TARGET interbank settlement days.
    Target,
    /// Paris.
    Paris,
    /// Frankfurt.
    Frankfurt,
    /// Milan.
    Milan,
}

impl Market {
    fn holidays(&self) -> &'static HolidaySet {
        match self {
            Market::UsGovernmentSecurities => united_states::government_securities(),
            Market::UsSettlement => united_states::settlement(),
            Market::LondonExchange => united_kingdom::london_exchange(),
            Market::Tokyo => japan::tokyo(),
            Market::Sydney => australia::sydney(),
            Market::Target => eurozone::target(),
            Market::Paris => eurozone::paris(),
            Market::Frankfurt => eurozone::frankfurt(),
            Market::Milan => eurozone::milan(),
        }
    }

    /// Returns the calendar's display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.holidays().name()
    }
}

/// How member calendars combine in a joint calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JointRule {
    /// A day is a business day only if it is one in every member
    /// (holidays accumulate).
    JoinHolidays,
    /// A day is a business day if it is one in any member.
    JoinBusinessDays,
}

/// A business-day calendar.
///
/// # Example
///
/// ```rust
/// use cadence_core::calendars::{BusinessDayConvention, Calendar};
/// use cadence_core::types::Date;
///
/// let calendar: Calendar = "USGS".parse().unwrap();
/// let sunday = Date::parse("25-05-2025").unwrap();
/// let adjusted = calendar.adjust(sunday, BusinessDayConvention::Following);
/// // Memorial Day follows the weekend, so Following lands on Tuesday.
/// assert_eq!(adjusted.to_string(), "27-05-2025");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Calendar {
    /// Every day, weekends included, is a business day.
    Null,
    /// A single market calendar.
    Market(Market),
    /// A composition of calendars under a [`JointRule`].
    Joint(Vec<Calendar>, JointRule),
}

impl Calendar {
    /// Creates a joint calendar over the given members.
    #[must_use]
    pub fn joint(members: Vec<Calendar>, rule: JointRule) -> Self {
        Calendar::Joint(members, rule)
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Calendar::Null => "Null".to_string(),
            Calendar::Market(market) => market.name().to_string(),
            Calendar::Joint(members, rule) => {
                let names: Vec<String> = members.iter().map(Calendar::name).collect();
                let joiner = match rule {
                    JointRule::JoinHolidays => " & ",
                    JointRule::JoinBusinessDays => " | ",
                };
                format!("Joint({})", names.join(joiner))
            }
        }
    }

    /// Checks whether a date is a business day.
    pub fn is_business_day(&self, date: Date) -> bool {
        match self {
            Calendar::Null => true,
            Calendar::Market(market) => market.holidays().is_business_day(date.as_naive_date()),
            Calendar::Joint(members, JointRule::JoinHolidays) => {
                members.iter().all(|m| m.is_business_day(date))
            }
            Calendar::Joint(members, JointRule::JoinBusinessDays) => {
                members.iter().any(|m| m.is_business_day(date))
            }
        }
    }

    /// Checks whether a date is a holiday or weekend.
    pub fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Rolls a date onto a business day per the convention.
    ///
    /// Business days are returned unchanged under every convention.
    #[must_use]
    pub fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        if convention == BusinessDayConvention::Unadjusted || self.is_business_day(date) {
            return date;
        }

        match convention {
            BusinessDayConvention::Following => self.next_business_day(date),
            BusinessDayConvention::Preceding => self.previous_business_day(date),
            BusinessDayConvention::ModifiedFollowing => {
                let rolled = self.next_business_day(date);
                if rolled.month() != date.month() {
                    self.previous_business_day(date)
                } else {
                    rolled
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let rolled = self.previous_business_day(date);
                if rolled.month() != date.month() {
                    self.next_business_day(date)
                } else {
                    rolled
                }
            }
            BusinessDayConvention::Unadjusted => date,
        }
    }

    /// Returns the first business day strictly after `date`.
    #[must_use]
    pub fn next_business_day(&self, date: Date) -> Date {
        let mut current = date.add_days(1);
        while !self.is_business_day(current) {
            current = current.add_days(1);
        }
        current
    }

    /// Returns the last business day strictly before `date`.
    #[must_use]
    pub fn previous_business_day(&self, date: Date) -> Date {
        let mut current = date.add_days(-1);
        while !self.is_business_day(current) {
            current = current.add_days(-1);
        }
        current
    }

    /// Steps a signed number of business days from `date`.
    ///
    /// `n = 0` returns the date unchanged, even on a holiday.
    #[must_use]
    pub fn add_business_days(&self, date: Date, n: i64) -> Date {
        let mut current = date;
        if n >= 0 {
            for _ in 0..n {
                current = self.next_business_day(current);
            }
        } else {
            for _ in 0..(-n) {
                current = self.previous_business_day(current);
            }
        }
        current
    }

    /// Counts business days in the half-open interval from `from`
    /// (exclusive) to `to` (inclusive). Negative when `to < from`.
    pub fn business_days_between(&self, from: Date, to: Date) -> i64 {
        if to < from {
            return -self.business_days_between(to, from);
        }
        let mut count = 0;
        let mut current = from.add_days(1);
        while current <= to {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }
        count
    }

    /// Returns the last calendar day of the month containing `date`.
    ///
    /// This is the calendar-day definition; holidays do not move it.
    #[must_use]
    pub fn end_of_month(&self, date: Date) -> Date {
        date.end_of_month()
    }

    /// Checks whether `date` is the last calendar day of its month.
    pub fn is_end_of_month(&self, date: Date) -> bool {
        date.is_end_of_month()
    }

    /// Advances a date by a tenor.
    ///
    /// - `0D` adjusts only.
    /// - Nonzero day tenors step business days.
    /// - Week tenors add calendar weeks, then adjust.
    /// - Month and year tenors add calendar months/years with day
    ///   clamping, then adjust. With `end_of_month` set and a start date
    ///   on its month's last calendar day, the result is pinned to the
    ///   target month's last calendar day and rolled backward so it
    ///   cannot leave the month.
    #[must_use]
    pub fn advance(
        &self,
        date: Date,
        tenor: Tenor,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Date {
        let n = tenor.length();
        match tenor.unit() {
            TimeUnit::Days => {
                if n == 0 {
                    self.adjust(date, convention)
                } else {
                    self.add_business_days(date, n as i64)
                }
            }
            TimeUnit::Weeks => self.adjust(date.add_days(7 * n as i64), convention),
            TimeUnit::Months | TimeUnit::Years => {
                let raw = match tenor.unit() {
                    TimeUnit::Months => date.add_months(n),
                    _ => date.add_years(n),
                };
                if end_of_month && date.is_end_of_month() {
                    self.adjust(raw.end_of_month(), BusinessDayConvention::Preceding)
                } else {
                    self.adjust(raw, convention)
                }
            }
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Calendar {
    type Err = CadenceError;

    /// Resolves market tokens.
    ///
    /// `NONE` is the null calendar, `TARGET` the holiday-joining
    /// composition of the TARGET settlement days with the Paris,
    /// Frankfurt, and Milan exchanges.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(Calendar::Null),
            "NYC" => Ok(Calendar::Market(Market::UsSettlement)),
            "USGS" => Ok(Calendar::Market(Market::UsGovernmentSecurities)),
            "LON" => Ok(Calendar::Market(Market::LondonExchange)),
            "TOK" => Ok(Calendar::Market(Market::Tokyo)),
            "SYD" => Ok(Calendar::Market(Market::Sydney)),
            "TARGET" => Ok(Calendar::joint(
                vec![
                    Calendar::Market(Market::Target),
                    Calendar::Market(Market::Paris),
                    Calendar::Market(Market::Frankfurt),
                    Calendar::Market(Market::Milan),
                ],
                JointRule::JoinHolidays,
            )),
            _ => Err(CadenceError::UnsupportedCalendar {
                token: s.to_string(),
            }),
        }
    }
}
