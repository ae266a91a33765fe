//! Schedule generation errors.

use cadence_core::types::Tenor;
use thiserror::Error;

/// A specialized Result type for schedule generation.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors raised while generating a schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The coupon period does not progress the date grid.
    #[error("Invalid period: {tenor} has zero length")]
    InvalidPeriod {
        /// The offending tenor.
        tenor: Tenor,
    },

    /// The schedule parameters are inconsistent.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// Description of the inconsistency.
        message: String,
    },
}

impl ScheduleError {
    /// Creates an invalid-schedule error.
    #[must_use]
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            message: message.into(),
        }
    }
}
