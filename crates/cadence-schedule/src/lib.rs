//! Cashflow schedule generation.
//!
//! Builds the ordered accrual/fixing/payment rows for a fixed income
//! instrument from a start date, end date, and coupon period, on top of
//! the calendars and day counts in `cadence-core`.
//!
//! # Example
//!
//! ```rust
//! use cadence_core::prelude::*;
//! use cadence_schedule::{Schedule, ScheduleConfig};
//!
//! let config = ScheduleConfig::new(
//!     Date::parse("25-05-2025").unwrap(),
//!     Date::parse("30-01-2027").unwrap(),
//!     "6M".parse().unwrap(),
//! )
//! .with_accrual_calendar("USGS".parse().unwrap())
//! .with_accrual_convention(BusinessDayConvention::Following)
//! .with_day_count("ACT/360".parse().unwrap());
//!
//! let schedule = Schedule::generate(&config).unwrap();
//! assert_eq!(schedule.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod generate;

pub use config::{DateGenerationRule, ScheduleConfig};
pub use error::{ScheduleError, ScheduleResult};
pub use generate::{Schedule, ScheduleRow};
