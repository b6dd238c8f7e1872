//! Case-study dataset and wide/long reshaping
//!
//! `Dataset` owns the case-study rows and hands out column views
//! (`MetricSeries`, `MetricPair`) for the statistics step. For charting it
//! melts one metric into long-form `(component, approach, value)` records;
//! `pivot_wide` is the inverse.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Approach, CaseStudy, LongFormRecord, Metric, MetricPair, MetricSeries};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("Dataset contains no case studies")]
    Empty,

    #[error("Duplicate component in dataset: {0}")]
    DuplicateComponent(String),

    #[error("Duplicate long-form record for {component} / {approach}")]
    DuplicateRecord { component: String, approach: Approach },

    #[error("Component {component} has no {approach} observation")]
    MissingApproach { component: String, approach: Approach },
}

/// Immutable table of case studies, one row per component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    case_studies: Vec<CaseStudy>,
}

impl Dataset {
    /// Build a dataset, rejecting an empty table or repeated component labels.
    ///
    /// Component identity is what pairs the Conventional and DfAM columns,
    /// so labels must be unique.
    pub fn from_case_studies(case_studies: Vec<CaseStudy>) -> Result<Self, DatasetError> {
        if case_studies.is_empty() {
            return Err(DatasetError::Empty);
        }
        let mut seen = HashSet::new();
        for cs in &case_studies {
            let label = cs.label();
            if !seen.insert(label.clone()) {
                return Err(DatasetError::DuplicateComponent(label));
            }
        }
        Ok(Self { case_studies })
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    pub fn len(&self) -> usize {
        self.case_studies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.case_studies.is_empty()
    }

    /// Component labels in row order.
    pub fn components(&self) -> Vec<String> {
        self.case_studies.iter().map(CaseStudy::label).collect()
    }

    /// One column of the wide table.
    pub fn series(&self, metric: Metric, approach: Approach) -> MetricSeries {
        MetricSeries {
            metric,
            approach,
            values: self
                .case_studies
                .iter()
                .map(|cs| cs.value(metric, approach))
                .collect(),
        }
    }

    /// Conventional and DfAM columns for one metric, paired by row.
    pub fn pair(&self, metric: Metric) -> MetricPair {
        MetricPair {
            metric,
            conventional: self.series(metric, Approach::Conventional),
            dfam: self.series(metric, Approach::DfAM),
        }
    }

    /// Melt one metric into long form.
    ///
    /// All Conventional rows come first, then all DfAM rows, each in
    /// case-study order.
    pub fn to_long_form(&self, metric: Metric) -> Vec<LongFormRecord> {
        Approach::ALL
            .iter()
            .flat_map(|&approach| {
                self.case_studies.iter().map(move |cs| LongFormRecord {
                    component: cs.label(),
                    approach,
                    value: cs.value(metric, approach),
                })
            })
            .collect()
    }
}

/// One component's paired values for a single metric, in wide form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WideRow {
    pub component: String,
    pub conventional: f64,
    pub dfam: f64,
}

/// Pivot long-form records back to one row per component.
///
/// Rows keep the order in which components first appear. Fails on a
/// repeated (component, approach) record or a component missing either
/// approach.
pub fn pivot_wide(records: &[LongFormRecord]) -> Result<Vec<WideRow>, DatasetError> {
    let mut order: Vec<&str> = Vec::new();
    let mut cells: HashMap<(&str, Approach), f64> = HashMap::new();

    for r in records {
        if cells.insert((r.component.as_str(), r.approach), r.value).is_some() {
            return Err(DatasetError::DuplicateRecord {
                component: r.component.clone(),
                approach: r.approach,
            });
        }
        if !order.contains(&r.component.as_str()) {
            order.push(r.component.as_str());
        }
    }

    order
        .into_iter()
        .map(|component| {
            let lookup = |approach: Approach| {
                cells
                    .get(&(component, approach))
                    .copied()
                    .ok_or_else(|| DatasetError::MissingApproach {
                        component: component.to_string(),
                        approach,
                    })
            };
            Ok(WideRow {
                component: component.to_string(),
                conventional: lookup(Approach::Conventional)?,
                dfam: lookup(Approach::DfAM)?,
            })
        })
        .collect()
}
