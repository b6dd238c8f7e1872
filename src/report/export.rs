//! Chart input export
//!
//! Each metric becomes one grouped bar chart: category axis = component,
//! bars grouped by approach. This module does not draw anything; it writes
//! the long-form data (`<metric>.csv`) and a `charts.json` manifest with
//! titles and axis labels for an external plotting tool.

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::dataset::Dataset;
use crate::types::{LongFormRecord, Metric};

/// Manifest file written next to the per-metric CSVs.
pub const CHART_MANIFEST_FILE: &str = "charts.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export I/O error ({0:?}): {1}")]
    Io(PathBuf, #[source] io::Error),

    #[error("Chart manifest serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything needed to draw one grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub metric: Metric,
    pub title: String,
    /// Category axis
    pub x_label: String,
    /// Value axis, with units
    pub y_label: String,
    /// Grouping column
    pub hue: String,
    /// CSV holding `records`, relative to the export directory
    pub data_file: String,
    pub records: Vec<LongFormRecord>,
}

impl ChartSpec {
    pub fn for_metric(dataset: &Dataset, metric: Metric) -> Self {
        Self {
            metric,
            title: format!("{}: Conventional vs. DfAM", metric.display_name()),
            x_label: "Component".to_string(),
            y_label: metric.value_label().to_string(),
            hue: "Approach".to_string(),
            data_file: format!("{}.csv", metric.column_prefix().to_lowercase()),
            records: dataset.to_long_form(metric),
        }
    }
}

/// One chart spec per metric, in reporting order.
pub fn chart_specs(dataset: &Dataset) -> Vec<ChartSpec> {
    Metric::ALL
        .iter()
        .map(|&m| ChartSpec::for_metric(dataset, m))
        .collect()
}

/// Write long-form records as CSV: `Component,Approach,<value label>`.
pub fn write_long_form_csv<W: Write>(
    writer: W,
    metric: Metric,
    records: &[LongFormRecord],
) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);

    // Header
    writeln!(
        writer,
        "Component,Approach,{}",
        csv_field(metric.value_label())
    )?;

    // Data rows
    for r in records {
        writeln!(
            writer,
            "{},{},{}",
            csv_field(&r.component),
            r.approach,
            r.value
        )?;
    }

    writer.flush()
}

/// Write every chart's CSV plus the manifest into `dir`, creating it if needed.
///
/// Returns the paths written, manifest last.
pub fn export_charts(dir: &Path, dataset: &Dataset) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::Io(dir.to_path_buf(), e))?;

    let specs = chart_specs(dataset);
    let mut written = Vec::with_capacity(specs.len() + 1);

    for spec in &specs {
        let path = dir.join(&spec.data_file);
        let file = File::create(&path).map_err(|e| ExportError::Io(path.clone(), e))?;
        write_long_form_csv(file, spec.metric, &spec.records)
            .map_err(|e| ExportError::Io(path.clone(), e))?;
        info!(path = %path.display(), rows = spec.records.len(), "Wrote chart data");
        written.push(path);
    }

    let manifest = dir.join(CHART_MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&specs)?;
    std::fs::write(&manifest, json).map_err(|e| ExportError::Io(manifest.clone(), e))?;
    info!(path = %manifest.display(), charts = specs.len(), "Wrote chart manifest");
    written.push(manifest);

    Ok(written)
}

/// Quote a CSV field when it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_case_studies;

    fn dataset() -> Dataset {
        Dataset::from_case_studies(default_case_studies()).unwrap()
    }

    #[test]
    fn test_chart_titles_and_labels() {
        let specs = chart_specs(&dataset());
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].title, "Design Iterations: Conventional vs. DfAM");
        assert_eq!(specs[1].title, "Surface Roughness: Conventional vs. DfAM");
        assert_eq!(specs[2].y_label, "Dimensional Error (mm)");
        assert_eq!(specs[1].data_file, "surfaceroughness.csv");
        assert!(specs.iter().all(|s| s.records.len() == 8));
    }

    #[test]
    fn test_csv_quotes_value_label_with_comma() {
        let ds = dataset();
        let mut buf = Vec::new();
        write_long_form_csv(
            &mut buf,
            Metric::SurfaceRoughness,
            &ds.to_long_form(Metric::SurfaceRoughness),
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Component,Approach,\"Surface Roughness (Ra, µm)\"");
        assert_eq!(lines[1], "Satellite Structure (SLS),Conventional,14");
        assert_eq!(lines[8], "Biomimetic Spring (SLS),DfAM,12");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_csv_field_escaping() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_export_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("charts");
        let written = export_charts(&out, &dataset()).unwrap();

        assert_eq!(written.len(), 4);
        assert!(out.join("iterations.csv").exists());
        assert!(out.join("dimensionalerror.csv").exists());

        let manifest = std::fs::read_to_string(out.join(CHART_MANIFEST_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[0]["hue"], "Approach");
    }
}
