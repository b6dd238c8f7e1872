//! Paired t-test
//!
//! Compares two equal-length series of matched observations through their
//! element-wise differences:
//!
//! ```text
//! d_i = a_i - b_i
//! t   = mean(d) / (sd(d) / sqrt(n)),   df = n - 1
//! p   = 2 * S_t(|t|; df)              (S_t = 1 - F_t, the survival function)
//! ```
//!
//! A difference series whose spread is within rounding noise of its mean is
//! reported as `DegenerateVariance` rather than producing an infinite or
//! meaningless statistic.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;

use super::{ensure_finite, StatsError, MIN_OBSERVATIONS};

/// Fails with `NonFiniteStatistic` when an intermediate leaves the f64 range.
fn ensure_finite_statistic(quantity: &'static str, value: f64) -> Result<f64, StatsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatsError::NonFiniteStatistic { quantity, value })
    }
}

/// True when `sd` is indistinguishable from zero at the scale of `mean`.
///
/// Differences that are all equal in decimal can still carry a few ulps of
/// spread after subtraction (0.3 - 0.1 vs 0.7 - 0.5).
#[allow(clippy::cast_precision_loss)]
fn is_degenerate(sd: f64, mean: f64, n: usize) -> bool {
    sd <= f64::EPSILON * mean.abs().max(f64::MIN_POSITIVE) * n as f64
}

/// Outcome of a paired t-test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedTTest {
    /// Number of pairs
    pub n: usize,
    /// Mean of a_i - b_i
    pub mean_difference: f64,
    /// Sample standard deviation of the differences (n-1)
    pub sd_difference: f64,
    /// sd_difference / sqrt(n)
    pub standard_error: f64,
    /// Signed t statistic; positive when `a` tends to exceed `b`
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    /// Two-sided p-value
    pub p_value: f64,
}

impl PairedTTest {
    /// True when the two-sided p-value falls below `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Run a paired t-test between `a` and `b`.
///
/// # Errors
/// - `LengthMismatch` if the series differ in length
/// - `InsufficientData` with fewer than 2 pairs
/// - `NonFiniteValue` on NaN/infinite input (index refers to `a`, or to `b`
///   when `a` is clean)
/// - `DegenerateVariance` when every difference is identical, up to rounding
/// - `NonFiniteStatistic` when finite inputs overflow during subtraction or
///   in the variance
#[allow(clippy::cast_precision_loss)]
pub fn paired_t_test(a: &[f64], b: &[f64]) -> Result<PairedTTest, StatsError> {
    if a.len() != b.len() {
        return Err(StatsError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    ensure_finite(a)?;
    ensure_finite(b)?;

    let n = a.len();
    if n < MIN_OBSERVATIONS {
        return Err(StatsError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: n,
        });
    }

    let differences: Vec<f64> = a.iter().zip(b).map(|(x, y)| x - y).collect();
    if let Some(&value) = differences.iter().find(|d| !d.is_finite()) {
        return Err(StatsError::NonFiniteStatistic {
            quantity: "paired difference",
            value,
        });
    }
    let mean_difference = ensure_finite_statistic("mean difference", differences.iter().mean())?;
    let sd_difference = ensure_finite_statistic(
        "standard deviation of differences",
        differences.iter().std_dev(),
    )?;

    if is_degenerate(sd_difference, mean_difference, n) {
        return Err(StatsError::DegenerateVariance { mean_difference });
    }

    let standard_error = sd_difference / (n as f64).sqrt();
    let t_statistic = ensure_finite_statistic("t statistic", mean_difference / standard_error)?;
    let degrees_of_freedom = (n - 1) as f64;
    let p_value = two_sided_p_value(t_statistic, degrees_of_freedom)?;

    Ok(PairedTTest {
        n,
        mean_difference,
        sd_difference,
        standard_error,
        t_statistic,
        degrees_of_freedom,
        p_value,
    })
}

/// Two-sided p-value of `t` under Student's t-distribution with `df` degrees
/// of freedom.
///
/// Uses the survival function so tiny p-values keep their precision instead
/// of collapsing to zero.
///
/// # Errors
/// - `Distribution` if statrs rejects the degrees of freedom (df <= 0 or NaN)
/// - `NonFiniteStatistic` if `t` is NaN
pub fn two_sided_p_value(t: f64, df: f64) -> Result<f64, StatsError> {
    if t.is_nan() {
        return Err(StatsError::NonFiniteStatistic {
            quantity: "t statistic",
            value: t,
        });
    }
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::Distribution(e.to_string()))?;
    let p = 2.0 * dist.sf(t.abs());
    Ok(p.clamp(0.0, 1.0))
}
