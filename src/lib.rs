//! DfAM Stats: Conventional vs. Design-for-Additive-Manufacturing
//!
//! Paired comparative statistics over case-study components, each measured
//! under both design approaches.
//!
//! ## Architecture
//!
//! - **Config**: case-study table and test settings from TOML (built-in defaults)
//! - **Dataset**: immutable wide table, column views and long-form reshaping
//! - **Stats**: descriptive summaries and the paired t-test (statrs)
//! - **Analysis**: per-metric orchestration into a `StudyReport`
//! - **Report**: text/JSON rendering and chart-input export

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod report;
pub mod stats;
pub mod types;

pub use analysis::{AnalysisError, ComparisonAnalyzer};
pub use config::{ConfigError, StudyConfig};
pub use dataset::{pivot_wide, Dataset, DatasetError, WideRow};
pub use report::{render_json, render_text, MetricReport, StudyReport};
pub use stats::{describe, paired_t_test, DescriptiveSummary, PairedTTest, StatsError};
pub use types::{AmProcess, Approach, CaseStudy, LongFormRecord, Metric, MetricPair, MetricSeries};
