//! Tagged union of an absolute date and a relative tenor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CadenceError, CadenceResult};
use crate::types::{Date, Tenor};

/// Either an absolute `Date` or a relative `Tenor`.
///
/// Maturity-style inputs accept both forms ("01-02-2027" or "2Y"); the
/// variant is resolved at the string boundary and accessed explicitly.
/// Tokens containing `-` are routed to the date parser, everything else
/// to the tenor parser, so a negative tenor literal is not reachable
/// through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateOrTenor {
    /// An absolute calendar date.
    Date(Date),
    /// A relative period.
    Tenor(Tenor),
}

impl DateOrTenor {
    /// Returns the date, or a type-mismatch error if this holds a tenor.
    pub fn as_date(&self) -> CadenceResult<Date> {
        match self {
            DateOrTenor::Date(date) => Ok(*date),
            DateOrTenor::Tenor(tenor) => Err(CadenceError::type_mismatch(format!(
                "expected a date, found tenor {tenor}"
            ))),
        }
    }

    /// Returns the tenor, or a type-mismatch error if this holds a date.
    pub fn as_tenor(&self) -> CadenceResult<Tenor> {
        match self {
            DateOrTenor::Tenor(tenor) => Ok(*tenor),
            DateOrTenor::Date(date) => Err(CadenceError::type_mismatch(format!(
                "expected a tenor, found date {date}"
            ))),
        }
    }

    /// Checks whether this holds an absolute date.
    #[must_use]
    pub fn is_date(&self) -> bool {
        matches!(self, DateOrTenor::Date(_))
    }
}

impl fmt::Display for DateOrTenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrTenor::Date(date) => date.fmt(f),
            DateOrTenor::Tenor(tenor) => tenor.fmt(f),
        }
    }
}

impl FromStr for DateOrTenor {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('-') {
            Date::parse(s).map(DateOrTenor::Date)
        } else {
            s.parse::<Tenor>().map(DateOrTenor::Tenor)
        }
    }
}

impl From<Date> for DateOrTenor {
    fn from(date: Date) -> Self {
        DateOrTenor::Date(date)
    }
}

impl From<Tenor> for DateOrTenor {
    fn from(tenor: Tenor) -> Self {
        DateOrTenor::Tenor(tenor)
    }
}
