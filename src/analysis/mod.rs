//! Comparison Analyzer
//!
//! Orchestrates the statistics step over every metric:
//! 1. Describe the Conventional and DfAM series
//! 2. Run the paired t-test (Conventional minus DfAM)
//! 3. Compute the relative mean reduction and the significance verdict
//! 4. Collect everything into a `StudyReport`
//!
//! Metrics are independent; the first failing metric aborts the run and the
//! error names it.

use thiserror::Error;
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::report::{MetricReport, StudyReport};
use crate::stats::{describe, paired_t_test, StatsError};
use crate::types::Metric;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("{metric}: {source}")]
    Metric {
        metric: Metric,
        #[source]
        source: StatsError,
    },

    #[error("Significance level {0} must be within (0, 1)")]
    InvalidAlpha(f64),
}

/// Runs the descriptive and paired-test steps for each metric.
#[derive(Debug, Clone)]
pub struct ComparisonAnalyzer {
    alpha: f64,
    title: String,
}

impl ComparisonAnalyzer {
    /// Create an analyzer testing at significance level `alpha`.
    pub fn new(alpha: f64) -> Result<Self, AnalysisError> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(AnalysisError::InvalidAlpha(alpha));
        }
        Ok(Self {
            alpha,
            title: crate::config::defaults::DEFAULT_STUDY_TITLE.to_string(),
        })
    }

    /// Set the report title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Analyze every metric, in `Metric::ALL` order.
    pub fn analyze(&self, dataset: &Dataset) -> Result<StudyReport, AnalysisError> {
        info!(
            cases = dataset.len(),
            alpha = self.alpha,
            "Running paired comparison"
        );

        let metrics = Metric::ALL
            .iter()
            .map(|&metric| self.analyze_metric(dataset, metric))
            .collect::<Result<Vec<_>, _>>()?;

        let significant = metrics.iter().filter(|m| m.significant).count();
        info!(
            significant,
            total = metrics.len(),
            "Paired comparison complete"
        );

        Ok(StudyReport {
            title: self.title.clone(),
            alpha: self.alpha,
            case_count: dataset.len(),
            components: dataset.components(),
            metrics,
        })
    }

    /// Describe both series of one metric and run its paired test.
    pub fn analyze_metric(
        &self,
        dataset: &Dataset,
        metric: Metric,
    ) -> Result<MetricReport, AnalysisError> {
        let wrap = |source| AnalysisError::Metric { metric, source };
        let pair = dataset.pair(metric);

        let conventional = describe(&pair.conventional.values).map_err(wrap)?;
        let dfam = describe(&pair.dfam.values).map_err(wrap)?;
        let t_test = paired_t_test(&pair.conventional.values, &pair.dfam.values).map_err(wrap)?;

        let mean_reduction_pct = mean_reduction_pct(conventional.mean, dfam.mean);
        let significant = t_test.is_significant(self.alpha);

        debug!(
            metric = %metric,
            t = t_test.t_statistic,
            p = t_test.p_value,
            significant,
            "Paired t-test"
        );

        Ok(MetricReport {
            metric,
            conventional,
            dfam,
            t_test,
            mean_reduction_pct,
            significant,
        })
    }
}

/// Relative drop from the Conventional mean to the DfAM mean, in percent.
///
/// `None` when the Conventional mean is zero.
pub fn mean_reduction_pct(conventional_mean: f64, dfam_mean: f64) -> Option<f64> {
    if conventional_mean == 0.0 {
        None
    } else {
        Some((conventional_mean - dfam_mean) / conventional_mean * 100.0)
    }
}
