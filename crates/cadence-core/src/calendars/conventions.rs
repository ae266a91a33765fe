//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CadenceError;

/// How a date falling on a non-business day is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    /// Roll forward to the next business day.
    #[default]
    Following,
    /// Roll forward unless that crosses a month boundary, then backward.
    ModifiedFollowing,
    /// Roll backward to the previous business day.
    Preceding,
    /// Roll backward unless that crosses a month boundary, then forward.
    ModifiedPreceding,
    /// Leave the date as it is.
    Unadjusted,
}

impl BusinessDayConvention {
    /// Returns the short market token.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::Preceding => "P",
            BusinessDayConvention::ModifiedPreceding => "MP",
            BusinessDayConvention::Unadjusted => "UNADJUSTED",
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = CadenceError;

    /// Parses convention tokens. `NONE` resolves to `Following`, the
    /// library-wide default roll direction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "F" | "FOLLOWING" => Ok(BusinessDayConvention::Following),
            "MF" | "MODIFIEDFOLLOWING" => Ok(BusinessDayConvention::ModifiedFollowing),
            "P" | "PRECEDING" => Ok(BusinessDayConvention::Preceding),
            "MP" | "MODIFIEDPRECEDING" => Ok(BusinessDayConvention::ModifiedPreceding),
            "UNADJUSTED" => Ok(BusinessDayConvention::Unadjusted),
            "NONE" => Ok(BusinessDayConvention::Following),
            _ => Err(CadenceError::UnsupportedBusinessDayConvention {
                token: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(
            "MF".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(
            "following".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::Following
        );
        assert_eq!(
            "MP".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedPreceding
        );
    }

    #[test]
    fn test_none_defaults_to_following() {
        assert_eq!(
            "NONE".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::Following
        );
    }

    #[test]
    fn test_unknown_token() {
        assert!(matches!(
            "SIDEWAYS".parse::<BusinessDayConvention>(),
            Err(CadenceError::UnsupportedBusinessDayConvention { .. })
        ));
    }
}
