//! Core types for the Cadence business-day calendar engine.
//!
//! This crate provides the building blocks for fixed income date
//! arithmetic:
//!
//! - [`types::Date`]: calendar dates with strict `DD-MM-YYYY` parsing
//! - [`types::Tenor`]: signed time periods (`3M`, `10Y`, `-2D`)
//! - [`calendars::Calendar`]: market holiday calendars, joint
//!   compositions, business-day rolling and advancement
//! - [`daycounts::DayCount`]: year-fraction conventions
//!
//! # Example
//!
//! ```rust
//! use cadence_core::prelude::*;
//!
//! let calendar: Calendar = "USGS".parse().unwrap();
//! let start = Date::parse("25-05-2025").unwrap();
//!
//! // Sunday before Memorial Day rolls to Tuesday
//! let spot = calendar.adjust(start, BusinessDayConvention::Following);
//! assert_eq!(spot.to_string(), "27-05-2025");
//!
//! let dc: DayCountConvention = "ACT/360".parse().unwrap();
//! let yf = dc
//!     .to_day_count(&calendar)
//!     .year_fraction(spot, Date::parse("30-07-2025").unwrap());
//! assert!(yf > rust_decimal::Decimal::ZERO);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

pub use error::{CadenceError, CadenceResult};

/// Commonly used imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, JointRule, Market};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CadenceError, CadenceResult};
    pub use crate::types::{Currency, Date, DateOrTenor, Tenor, TimeUnit};
}
