//! Error types for the Cadence library.
//!
//! All failures are detected synchronously and surfaced to the caller;
//! nothing is silently defaulted past the token-resolution boundary.

use thiserror::Error;

/// A specialized Result type for Cadence operations.
pub type CadenceResult<T> = Result<T, CadenceError>;

/// The main error type for Cadence operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CadenceError {
    /// A date token does not match the `DD-MM-YYYY` structural pattern.
    #[error("Invalid date format: '{token}' (expected DD-MM-YYYY)")]
    InvalidDateFormat {
        /// The offending token.
        token: String,
    },

    /// A structurally valid date token names a day that does not exist
    /// in its month (including the leap-year February case).
    #[error("Invalid calendar date: {message}")]
    InvalidCalendarDate {
        /// Description of the date error.
        message: String,
    },

    /// A tenor token could not be parsed.
    #[error("Invalid tenor: '{token}' (expected e.g. 3M, 10Y, -2D)")]
    InvalidTenor {
        /// The offending token.
        token: String,
    },

    /// An unrecognized calendar token.
    #[error("Unsupported calendar: '{token}'")]
    UnsupportedCalendar {
        /// The offending token.
        token: String,
    },

    /// An unrecognized day-count token.
    #[error("Unsupported day count: '{token}'")]
    UnsupportedDayCount {
        /// The offending token.
        token: String,
    },

    /// An unrecognized business-day-convention token.
    #[error("Unsupported business day convention: '{token}'")]
    UnsupportedBusinessDayConvention {
        /// The offending token.
        token: String,
    },

    /// An unrecognized currency token.
    #[error("Unsupported currency: '{token}'")]
    UnsupportedCurrency {
        /// The offending token.
        token: String,
    },

    /// The wrong variant of a date-or-tenor value was accessed.
    #[error("Type mismatch: {message}")]
    TypeMismatch {
        /// Description of the expected and actual variants.
        message: String,
    },
}

impl CadenceError {
    /// Creates an invalid-date-format error.
    #[must_use]
    pub fn invalid_date_format(token: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            token: token.into(),
        }
    }

    /// Creates an invalid-calendar-date error.
    #[must_use]
    pub fn invalid_calendar_date(message: impl Into<String>) -> Self {
        Self::InvalidCalendarDate {
            message: message.into(),
        }
    }

    /// Creates a type-mismatch error.
    #[must_use]
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }
}
