//! Approaches, metrics and the column-shaped series built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Approach
// ============================================================================

/// Manufacturing design approach a measurement was taken under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Approach {
    /// Conventional design workflow
    Conventional,
    /// Design for Additive Manufacturing
    #[serde(rename = "DfAM")]
    DfAM,
}

impl Approach {
    /// Both approaches, in reporting order.
    pub const ALL: [Self; 2] = [Self::Conventional, Self::DfAM];

    /// Short label used in column names and report headers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conventional => "Conventional",
            Self::DfAM => "DfAM",
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Metric
// ============================================================================

/// Measured outcome compared between the two approaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Number of design iterations until an acceptable part
    Iterations,
    /// Surface roughness Ra (µm)
    SurfaceRoughness,
    /// Dimensional error (mm)
    DimensionalError,
}

impl Metric {
    /// All metrics, in reporting order.
    pub const ALL: [Self; 3] = [Self::Iterations, Self::SurfaceRoughness, Self::DimensionalError];

    /// Column prefix in wide form, e.g. `SurfaceRoughness` in `SurfaceRoughness_DfAM`.
    pub const fn column_prefix(self) -> &'static str {
        match self {
            Self::Iterations => "Iterations",
            Self::SurfaceRoughness => "SurfaceRoughness",
            Self::DimensionalError => "DimensionalError",
        }
    }

    /// Short name used in report section headers.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Iterations => "Iterations",
            Self::SurfaceRoughness => "Surface Roughness",
            Self::DimensionalError => "Dimensional Error",
        }
    }

    /// Human-readable metric name, as used in chart titles.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Iterations => "Design Iterations",
            Self::SurfaceRoughness => "Surface Roughness",
            Self::DimensionalError => "Dimensional Error",
        }
    }

    /// Value axis label, including units.
    pub const fn value_label(self) -> &'static str {
        match self {
            Self::Iterations => "Iterations",
            Self::SurfaceRoughness => "Surface Roughness (Ra, µm)",
            Self::DimensionalError => "Dimensional Error (mm)",
        }
    }

    /// Wide-form column name for one approach, e.g. `Iterations_Conventional`.
    pub fn column_name(self, approach: Approach) -> String {
        format!("{}_{}", self.column_prefix(), approach.label())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

// ============================================================================
// Series
// ============================================================================

/// Ordered observations for one (metric, approach) column, one per case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub metric: Metric,
    pub approach: Approach,
    pub values: Vec<f64>,
}

impl MetricSeries {
    /// Wide-form column name of this series.
    pub fn name(&self) -> String {
        self.metric.column_name(self.approach)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Conventional and DfAM series for one metric, element-wise paired by case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPair {
    pub metric: Metric,
    pub conventional: MetricSeries,
    pub dfam: MetricSeries,
}

// ============================================================================
// Long form
// ============================================================================

/// One observation in long ("melted") form, the shape chart tools consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongFormRecord {
    /// Component display label
    pub component: String,
    pub approach: Approach,
    pub value: f64,
}
