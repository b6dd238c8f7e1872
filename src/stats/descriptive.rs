//! Descriptive statistics for a single metric series.
//!
//! Matches the summary a dataframe `describe()` prints: count, mean, sample
//! standard deviation, min, 25% / 50% / 75% quantiles and max.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use super::{ensure_finite, StatsError, MIN_OBSERVATIONS};

/// Summary of one numeric series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (Bessel-corrected, n-1 denominator)
    pub std_dev: f64,
    pub min: f64,
    /// 25th percentile
    pub p25: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub p75: f64,
    pub max: f64,
}

/// Summarize a series.
///
/// # Errors
/// - `InsufficientData` when fewer than 2 values are given (the sample
///   standard deviation is undefined below that)
/// - `NonFiniteValue` when any value is NaN or infinite
pub fn describe(values: &[f64]) -> Result<DescriptiveSummary, StatsError> {
    ensure_finite(values)?;
    let n = values.len();
    if n < MIN_OBSERVATIONS {
        return Err(StatsError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: n,
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Ok(DescriptiveSummary {
        count: n,
        mean: values.iter().mean(),
        std_dev: values.iter().std_dev(),
        min: sorted[0],
        p25: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        p75: quantile_sorted(&sorted, 0.75),
        max: sorted[n - 1],
    })
}

/// Quantile of an unsorted series using linear interpolation (R-7).
///
/// # Errors
/// `InsufficientData` on an empty series, `InvalidQuantile` when `q` is
/// outside [0, 1], `NonFiniteValue` on NaN/infinite input.
pub fn quantile(values: &[f64], q: f64) -> Result<f64, StatsError> {
    ensure_finite(values)?;
    if values.is_empty() {
        return Err(StatsError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(StatsError::InvalidQuantile(q));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(quantile_sorted(&sorted, q))
}

/// R-7 quantile of an already sorted, non-empty slice.
///
/// `h = (n - 1) * q`, interpolated between `sorted[floor(h)]` and
/// `sorted[ceil(h)]`. Returns NaN for an empty slice.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let lower = sorted[lo];
    if lo == hi {
        return lower;
    }
    let fraction = h - lo as f64;
    lower + fraction * (sorted[hi] - lower)
}
