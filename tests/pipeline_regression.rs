//! Pipeline Regression Tests
//!
//! Runs config -> dataset -> analysis -> report/export end to end on the
//! built-in case studies and pins the numbers the comparison reports.

use dfam_stats::report::export::{chart_specs, export_charts};
use dfam_stats::{
    pivot_wide, render_json, render_text, Approach, ComparisonAnalyzer, Metric, StudyConfig,
    StudyReport,
};

/// Closed-form two-sided p-value of Student's t with 3 degrees of freedom.
fn t3_two_sided(t: f64) -> f64 {
    let x = t / 3.0_f64.sqrt();
    let cdf = 0.5 + (x / (1.0 + x * x) + x.atan()) / std::f64::consts::PI;
    2.0 * (1.0 - cdf)
}

fn run_default() -> StudyReport {
    let config = StudyConfig::default();
    let dataset = config.dataset().unwrap();
    ComparisonAnalyzer::new(config.study.significance_level)
        .unwrap()
        .with_title(config.study.title)
        .analyze(&dataset)
        .unwrap()
}

#[test]
fn iterations_match_reference_values() {
    let report = run_default();
    let m = report.metric(Metric::Iterations).unwrap();

    assert!((m.conventional.mean - 11.0).abs() < 1e-9);
    assert!((m.conventional.std_dev - 3.366_501_646).abs() < 1e-6);
    assert_eq!(m.conventional.min, 7.0);
    assert_eq!(m.conventional.max, 15.0);
    assert!((m.dfam.mean - 3.75).abs() < 1e-9);
    assert!((m.dfam.std_dev - 0.957_427_108).abs() < 1e-6);

    assert!((m.t_test.mean_difference - 7.25).abs() < 1e-9);
    assert!((m.t_test.sd_difference - 2.5).abs() < 1e-9);
    assert!((m.t_test.t_statistic - 5.8).abs() < 1e-9);
    assert_eq!(m.t_test.degrees_of_freedom, 3.0);
    assert!((m.t_test.p_value - t3_two_sided(5.8)).abs() < 1e-6);
}

#[test]
fn every_metric_matches_closed_form_p_value() {
    let report = run_default();
    let expected_t = [5.8, 13.0 / 3.0, 8.003_675_626];
    for (m, t) in report.metrics.iter().zip(expected_t) {
        assert!(
            (m.t_test.t_statistic - t).abs() < 1e-6,
            "{}: t = {}",
            m.metric,
            m.t_test.t_statistic
        );
        assert!(
            (m.t_test.p_value - t3_two_sided(m.t_test.t_statistic)).abs() < 1e-6,
            "{}: p = {}",
            m.metric,
            m.t_test.p_value
        );
        assert!(m.t_test.t_statistic > 0.0, "DfAM should reduce every metric");
    }
}

#[test]
fn dimensional_error_quartiles() {
    let report = run_default();
    let m = report.metric(Metric::DimensionalError).unwrap();
    assert!((m.conventional.p25 - 0.2).abs() < 1e-12);
    assert!((m.conventional.median - 0.25).abs() < 1e-12);
    assert!((m.conventional.p75 - 0.3).abs() < 1e-12);
    assert!((m.dfam.p25 - 0.1375).abs() < 1e-12);
    assert!((m.dfam.median - 0.17).abs() < 1e-12);
}

#[test]
fn pipeline_is_idempotent() {
    let first = run_default();
    let second = run_default();
    assert_eq!(first, second);
    assert_eq!(render_text(&first), render_text(&second));
    assert_eq!(render_json(&first).unwrap(), render_json(&second).unwrap());
}

#[test]
fn no_nan_in_report() {
    let json = render_json(&run_default()).unwrap();
    assert!(!json.contains("NaN"));
    assert!(!json.contains("null"), "every metric should have a reduction");
}

#[test]
fn long_form_roundtrip_for_every_chart() {
    let dataset = StudyConfig::default().dataset().unwrap();
    for spec in chart_specs(&dataset) {
        assert_eq!(spec.records.len(), 8);
        let wide = pivot_wide(&spec.records).unwrap();
        assert_eq!(wide.len(), 4);
        for (row, cs) in wide.iter().zip(dataset.case_studies()) {
            assert_eq!(row.conventional, cs.value(spec.metric, Approach::Conventional));
            assert_eq!(row.dfam, cs.value(spec.metric, Approach::DfAM));
        }
    }
}

#[test]
fn export_writes_csv_per_metric() {
    let dataset = StudyConfig::default().dataset().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let written = export_charts(dir.path(), &dataset).unwrap();
    assert_eq!(written.len(), 4);

    let csv = std::fs::read_to_string(dir.path().join("iterations.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Component,Approach,Iterations"));
    assert_eq!(lines.next(), Some("Satellite Structure (SLS),Conventional,7"));
    assert_eq!(csv.lines().count(), 9);
}
