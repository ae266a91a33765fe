//! Schedule generation.

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cadence_core::types::{Date, Tenor, TimeUnit};

use crate::config::{DateGenerationRule, ScheduleConfig};
use crate::error::{ScheduleError, ScheduleResult};

/// One accrual period of a generated schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Adjusted accrual period start.
    pub accrual_start: Date,
    /// Adjusted accrual period end.
    pub accrual_end: Date,
    /// Rate observation date.
    pub fixing_date: Date,
    /// Cashflow payment date.
    pub payment_date: Date,
    /// Accrued year fraction for the period.
    pub year_fraction: Decimal,
}

/// An ordered cashflow schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    rows: Vec<ScheduleRow>,
}

impl Schedule {
    /// Generates the schedule described by `config`.
    ///
    /// The date grid is rolled out with raw calendar arithmetic from the
    /// anchor (the end date for backward generation, the start date for
    /// forward), the remainder becoming a short stub at the opposite
    /// side. Every grid date is then rolled with the accrual calendar
    /// and convention, and consecutive pairs become rows.
    ///
    /// # Errors
    ///
    /// - `InvalidPeriod` if the period has zero length.
    /// - `InvalidSchedule` if the end date precedes the start date.
    pub fn generate(config: &ScheduleConfig) -> ScheduleResult<Self> {
        if config.period.is_zero() {
            return Err(ScheduleError::InvalidPeriod {
                tenor: config.period,
            });
        }
        if config.end < config.start {
            return Err(ScheduleError::invalid_schedule(format!(
                "end {} precedes start {}",
                config.end, config.start
            )));
        }

        debug!(
            "generating schedule {} -> {} every {} ({:?})",
            config.start, config.end, config.period, config.rule
        );

        let mut grid = build_grid(config);
        grid.sort_unstable();
        grid.dedup();

        // Roll the whole grid onto business days before pairing
        for date in &mut grid {
            *date = config
                .accrual_calendar
                .adjust(*date, config.accrual_convention);
        }
        grid.dedup();

        if grid.len() < 2 {
            return Ok(Schedule { rows: Vec::new() });
        }

        let day_count = config.day_count.to_day_count(&config.accrual_calendar);
        let rows = grid
            .windows(2)
            .map(|pair| {
                let (start, end) = (pair[0], pair[1]);

                let anchor = if config.fix_in_arrear { end } else { start };
                let fixing_date = if config.fixing_offset.is_zero() {
                    anchor
                } else {
                    config.accrual_calendar.advance(
                        anchor,
                        config.fixing_offset,
                        config.accrual_convention,
                        config.end_of_month,
                    )
                };

                let payment_date = if config.payment_offset.is_zero() {
                    end
                } else {
                    config.payment_calendar.advance(
                        end,
                        config.payment_offset,
                        config.payment_convention,
                        config.end_of_month,
                    )
                };

                let accrual_end = config
                    .accrual_calendar
                    .adjust(end, config.accrual_convention);

                ScheduleRow {
                    accrual_start: start,
                    accrual_end,
                    fixing_date,
                    payment_date,
                    year_fraction: day_count.year_fraction(start, accrual_end),
                }
            })
            .collect::<Vec<_>>();

        debug!("generated {} rows", rows.len());
        Ok(Schedule { rows })
    }

    /// Returns the rows in chronological order.
    #[must_use]
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Returns the number of accrual periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks whether the schedule is degenerate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the schedule, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<ScheduleRow> {
        self.rows
    }
}

impl IntoIterator for Schedule {
    type Item = ScheduleRow;
    type IntoIter = std::vec::IntoIter<ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleRow;
    type IntoIter = std::slice::Iter<'a, ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Steps a date by a tenor with raw calendar arithmetic, no rolling.
fn raw_step(date: Date, tenor: Tenor) -> Date {
    let n = tenor.length();
    match tenor.unit() {
        TimeUnit::Days => date.add_days(n as i64),
        TimeUnit::Weeks => date.add_days(7 * n as i64),
        TimeUnit::Months => date.add_months(n),
        TimeUnit::Years => date.add_years(n),
    }
}

/// Builds the unadjusted date grid, start and end always included.
///
/// Each grid point is the anchor stepped by a scaled tenor, so
/// month-end clamping does not compound across periods.
fn build_grid(config: &ScheduleConfig) -> Vec<Date> {
    // Direction comes from the generation rule, not the tenor sign
    let period = if config.period.length() < 0 {
        -config.period
    } else {
        config.period
    };

    let mut grid = vec![config.start, config.end];
    match config.rule {
        DateGenerationRule::Backward => {
            let mut i = 1;
            loop {
                let date = raw_step(config.end, -period * i);
                if date <= config.start {
                    break;
                }
                grid.push(date);
                i += 1;
            }
        }
        DateGenerationRule::Forward => {
            let mut i = 1;
            loop {
                let date = raw_step(config.start, period * i);
                if date >= config.end {
                    break;
                }
                grid.push(date);
                i += 1;
            }
        }
    }
    grid
}
