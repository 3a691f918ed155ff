//! Yield schedule derivation.
//!
//! Turns one validated input triple into the per-period schedule consumed
//! by the table and chart views. For a starting price `p`, per-unit revenue
//! `r`, and period count `n`, the schedule holds `n + 1` points:
//!
//! | Column  | Value at period `i`  |
//! |---------|----------------------|
//! | period  | `i` (0 through `n`)  |
//! | price   | `p - i * (p / n)`    |
//! | revenue | `r * i`              |
//!
//! Price decays linearly from `p` toward zero while cumulative revenue
//! grows linearly from zero to `r * n`. The derivation is exact: no value
//! is rounded here; display precision is the renderer's concern.
//!
//! # Example
//!
//! ```
//! use yield_core::calculations::build_schedule;
//! use yield_core::validation::ValidatedInputs;
//!
//! let inputs = ValidatedInputs {
//!     price: 100.0,
//!     revenue_per_unit: 10.0,
//!     periods: 5,
//! };
//!
//! let schedule = build_schedule(&inputs).unwrap();
//!
//! assert_eq!(schedule.len(), 6);
//! assert_eq!(schedule.points()[1].price, 80.0);
//! assert_eq!(schedule.points()[1].revenue, 10.0);
//! ```

use thiserror::Error;

use crate::models::{SchedulePoint, YieldSchedule};
use crate::validation::ValidatedInputs;

/// Errors that can occur during schedule derivation.
///
/// Inputs that passed field validation cannot trigger any of these; seeing
/// one means the caller bypassed validation, which is a programming error
/// rather than a user error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScheduleError {
    /// The period count is zero, which would divide by zero.
    #[error("period count must be at least 1")]
    NoPeriods,

    /// A scalar input is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A scalar input is zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Derives the yield schedule for the given validated inputs.
///
/// Pure and deterministic; produces exactly `inputs.periods + 1` points
/// ordered by period, price non-increasing and revenue non-decreasing.
///
/// # Errors
///
/// Returns [`ScheduleError`] when the inputs could not have passed
/// validation (zero periods, non-finite or non-positive scalars). The
/// guard makes a validator/engine mismatch surface as a diagnostic instead
/// of NaN or infinite schedule values.
pub fn build_schedule(inputs: &ValidatedInputs) -> Result<YieldSchedule, ScheduleError> {
    check_scalar("price", inputs.price)?;
    check_scalar("revenue", inputs.revenue_per_unit)?;
    if inputs.periods == 0 {
        return Err(ScheduleError::NoPeriods);
    }

    let step = inputs.price / f64::from(inputs.periods);

    let points = (0..=inputs.periods)
        .map(|period| SchedulePoint {
            period,
            price: inputs.price - f64::from(period) * step,
            revenue: inputs.revenue_per_unit * f64::from(period),
        })
        .collect();

    Ok(YieldSchedule::new(points))
}

fn check_scalar(field: &'static str, value: f64) -> Result<(), ScheduleError> {
    if !value.is_finite() {
        return Err(ScheduleError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ScheduleError::NotPositive { field, value });
    }
    Ok(())
}
