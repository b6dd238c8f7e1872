//! Study Report
//!
//! Result types produced by the analyzer and their two renderings:
//! - plain text, laid out like a dataframe `describe()` table followed by
//!   the paired t-test line for each metric
//! - pretty JSON via serde
//!
//! `export` writes the long-form chart inputs.

pub mod export;

use serde::Serialize;
use std::fmt;

use crate::stats::{DescriptiveSummary, PairedTTest};
use crate::types::{Approach, Metric};

/// Statistics for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricReport {
    pub metric: Metric,
    pub conventional: DescriptiveSummary,
    pub dfam: DescriptiveSummary,
    /// Paired test of Conventional minus DfAM
    pub t_test: PairedTTest,
    /// (mean_conventional - mean_dfam) / mean_conventional * 100
    pub mean_reduction_pct: Option<f64>,
    /// p-value below the study's alpha
    pub significant: bool,
}

/// Full output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyReport {
    pub title: String,
    pub alpha: f64,
    pub case_count: usize,
    /// Component labels in dataset order
    pub components: Vec<String>,
    pub metrics: Vec<MetricReport>,
}

impl StudyReport {
    /// Report for one metric, if it was analyzed.
    pub fn metric(&self, metric: Metric) -> Option<&MetricReport> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}

/// Render the console report.
pub fn render_text(report: &StudyReport) -> String {
    report.to_string()
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &StudyReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

// ============================================================================
// Text Rendering
// ============================================================================

const ROW_LABEL_WIDTH: usize = 5;

impl fmt::Display for StudyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(
            f,
            "{} case studies: {}",
            self.case_count,
            self.components.join(", ")
        )?;

        for m in &self.metrics {
            writeln!(f)?;
            write_describe_table(f, m)?;
        }

        for m in &self.metrics {
            writeln!(f)?;
            writeln!(f, "Paired t-test for {}:", m.metric)?;
            writeln!(
                f,
                "t-statistic: {}, p-value: {}",
                m.t_test.t_statistic, m.t_test.p_value
            )?;
            let verdict = if m.significant {
                "significant"
            } else {
                "not significant"
            };
            match m.mean_reduction_pct {
                Some(pct) => writeln!(
                    f,
                    "mean reduction with DfAM: {pct:.1}% ({verdict} at alpha = {})",
                    self.alpha
                )?,
                None => writeln!(f, "({verdict} at alpha = {})", self.alpha)?,
            }
        }
        Ok(())
    }
}

fn write_describe_table(f: &mut fmt::Formatter<'_>, m: &MetricReport) -> fmt::Result {
    let headers = [
        m.metric.column_name(Approach::Conventional),
        m.metric.column_name(Approach::DfAM),
    ];
    let widths = [headers[0].len().max(10) + 2, headers[1].len().max(10) + 2];

    writeln!(f, "Descriptive Statistics for {}:", m.metric)?;
    write!(f, "{:ROW_LABEL_WIDTH$}", "")?;
    for (h, w) in headers.iter().zip(widths) {
        write!(f, "{h:>w$}")?;
    }
    writeln!(f)?;

    #[allow(clippy::cast_precision_loss)]
    let rows: [(&str, fn(&DescriptiveSummary) -> f64); 8] = [
        ("count", |s| s.count as f64),
        ("mean", |s| s.mean),
        ("std", |s| s.std_dev),
        ("min", |s| s.min),
        ("25%", |s| s.p25),
        ("50%", |s| s.median),
        ("75%", |s| s.p75),
        ("max", |s| s.max),
    ];
    for (label, get) in rows {
        write!(f, "{label:<ROW_LABEL_WIDTH$}")?;
        for (summary, w) in [&m.conventional, &m.dfam].into_iter().zip(widths) {
            write!(f, "{:>w$.6}", get(summary))?;
        }
        writeln!(f)?;
    }
    Ok(())
}
