//! Tenor (time period) type used for date advancement and schedule grids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, Neg};
use std::str::FromStr;

use crate::error::CadenceError;

/// The unit of a tenor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Business days when advanced through a calendar.
    Days,
    /// Calendar weeks (seven days).
    Weeks,
    /// Calendar months, day-of-month clamped.
    Months,
    /// Calendar years, Feb 29 clamped.
    Years,
}

impl TimeUnit {
    /// Returns the single-letter code used in tenor tokens.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Years => 'Y',
        }
    }
}

/// A signed time period such as `3M`, `10Y`, or `-2D`.
///
/// The length may be negative, which advances backward. `0D` is the
/// conventional "adjust only" tenor for fixing and payment offsets.
///
/// # Example
///
/// ```rust
/// use cadence_core::types::{Tenor, TimeUnit};
///
/// let tenor: Tenor = "6M".parse().unwrap();
/// assert_eq!(tenor, Tenor::new(6, TimeUnit::Months));
/// assert_eq!((-tenor).to_string(), "-6M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenor {
    length: i32,
    unit: TimeUnit,
}

impl Tenor {
    /// Creates a tenor from a length and unit.
    #[must_use]
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Returns the signed length.
    #[must_use]
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Returns the unit.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Checks whether the tenor has zero length.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.unit.code())
    }
}

impl FromStr for Tenor {
    type Err = CadenceError;

    /// Parses tokens of the form `<signed integer><unit letter>`,
    /// case-insensitive on the unit: `3M`, `10y`, `-2D`, `0d`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || CadenceError::InvalidTenor {
            token: s.to_string(),
        };

        let unit_char = token.chars().last().ok_or_else(invalid)?;
        let number = &token[..token.len() - unit_char.len_utf8()];
        if number.is_empty() {
            return Err(invalid());
        }
        let unit = match unit_char.to_ascii_uppercase() {
            'D' => TimeUnit::Days,
            'W' => TimeUnit::Weeks,
            'M' => TimeUnit::Months,
            'Y' => TimeUnit::Years,
            _ => return Err(invalid()),
        };
        let length: i32 = number.parse().map_err(|_| invalid())?;

        Ok(Tenor::new(length, unit))
    }
}

impl Neg for Tenor {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Tenor::new(-self.length, self.unit)
    }
}

impl Mul<i32> for Tenor {
    type Output = Self;

    /// Scales the tenor length. Used to step a schedule grid off a fixed
    /// anchor instead of compounding month-end clamping errors.
    fn mul(self, rhs: i32) -> Self::Output {
        Tenor::new(self.length * rhs, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_tokens() {
        assert_eq!("1D".parse::<Tenor>().unwrap(), Tenor::new(1, TimeUnit::Days));
        assert_eq!("2W".parse::<Tenor>().unwrap(), Tenor::new(2, TimeUnit::Weeks));
        assert_eq!("6M".parse::<Tenor>().unwrap(), Tenor::new(6, TimeUnit::Months));
        assert_eq!("10Y".parse::<Tenor>().unwrap(), Tenor::new(10, TimeUnit::Years));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("3m".parse::<Tenor>().unwrap(), Tenor::new(3, TimeUnit::Months));
        assert_eq!("5y".parse::<Tenor>().unwrap(), Tenor::new(5, TimeUnit::Years));
    }

    #[test]
    fn test_parse_signed_and_zero() {
        assert_eq!("-2D".parse::<Tenor>().unwrap(), Tenor::new(-2, TimeUnit::Days));
        assert_eq!("+3M".parse::<Tenor>().unwrap(), Tenor::new(3, TimeUnit::Months));
        let zero = "0D".parse::<Tenor>().unwrap();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for token in ["", "M", "3", "3X", "threeM", "3.5M", "3 M"] {
            assert!(
                matches!(
                    token.parse::<Tenor>(),
                    Err(CadenceError::InvalidTenor { .. })
                ),
                "expected tenor error for {token:?}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Tenor::new(6, TimeUnit::Months).to_string(), "6M");
        assert_eq!(Tenor::new(-2, TimeUnit::Days).to_string(), "-2D");
    }

    #[test]
    fn test_neg_and_scale() {
        let tenor = Tenor::new(6, TimeUnit::Months);
        assert_eq!(-tenor, Tenor::new(-6, TimeUnit::Months));
        assert_eq!(tenor * 3, Tenor::new(18, TimeUnit::Months));
        assert_eq!(-tenor * 2, Tenor::new(-12, TimeUnit::Months));
    }
}
