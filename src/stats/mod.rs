//! Comparative Statistics
//!
//! Pure numeric core of the comparison pipeline:
//!
//! - `descriptive`: count, mean, sample std (n-1), min, quartiles (R-7 linear
//!   interpolation), max
//! - `paired`: paired t-test with a two-sided p-value from Student's
//!   t-distribution (statrs)
//!
//! Every function here is a total transform over its inputs or fails with a
//! `StatsError`; nothing is retried or recovered.

pub mod descriptive;
pub mod paired;

pub use descriptive::{describe, quantile, quantile_sorted, DescriptiveSummary};
pub use paired::{paired_t_test, two_sided_p_value, PairedTTest};

use thiserror::Error;

/// Fewest observations a variance-based statistic accepts.
pub const MIN_OBSERVATIONS: usize = 2;

/// Precondition violations raised by the statistics step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("Paired series differ in length: left has {left}, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Zero variance in paired differences (every difference equals {mean_difference})")]
    DegenerateVariance { mean_difference: f64 },

    #[error("Insufficient data: need {required} observations, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Non-finite value at index {index}: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("Non-finite {quantity} ({value}): inputs exceed the f64 range")]
    NonFiniteStatistic { quantity: &'static str, value: f64 },

    #[error("Invalid quantile {0}: must be within [0, 1]")]
    InvalidQuantile(f64),

    #[error("t-distribution error: {0}")]
    Distribution(String),
}

/// Reject NaN and infinities before any arithmetic touches them.
pub(crate) fn ensure_finite(values: &[f64]) -> Result<(), StatsError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(StatsError::NonFiniteValue {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
