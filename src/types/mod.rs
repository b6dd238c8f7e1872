//! Shared data structures for the DfAM case-study comparison
//!
//! - `Approach`, `Metric`: the two compared approaches and three measured metrics
//! - `AmProcess`, `CaseStudy`: one component measured under both approaches
//! - `MetricSeries`, `MetricPair`: column views used by the statistics step
//! - `LongFormRecord`: one (component, approach, value) triple for charting

mod case_study;
mod metric;

pub use case_study::*;
pub use metric::*;
