//! Currency codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CadenceError;

/// ISO 4217 currency codes for the supported markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar
    USD,
    /// Canadian Dollar
    CAD,
    /// British Pound
    GBP,
    /// Euro
    EUR,
    /// Japanese Yen
    JPY,
    /// Australian Dollar
    AUD,
}

impl Currency {
    /// Returns the three-letter ISO code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::JPY => "JPY",
            Currency::AUD => "AUD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "CAD" => Ok(Currency::CAD),
            "GBP" => Ok(Currency::GBP),
            "EUR" => Ok(Currency::EUR),
            "JPY" => Ok(Currency::JPY),
            "AUD" => Ok(Currency::AUD),
            _ => Err(CadenceError::UnsupportedCurrency {
                token: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for code in ["USD", "CAD", "GBP", "EUR", "JPY", "AUD"] {
            let currency: Currency = code.parse().unwrap();
            assert_eq!(currency.code(), code);
        }
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(
            "XXX".parse::<Currency>(),
            Err(CadenceError::UnsupportedCurrency { .. })
        ));
    }
}
