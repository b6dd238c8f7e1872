//! Config Validation Tests
//!
//! Typo detection and range validation of study configs, exercised through
//! the public loading API independently from the analysis pipeline.

use std::io::Write;

use dfam_stats::config::validation::{
    known_config_keys, suggest_correction, validate_physical_ranges, validate_unknown_keys,
};
use dfam_stats::config::{ConfigError, StudyConfig};
use dfam_stats::AmProcess;

const TWO_ROW_STUDY: &str = r#"
[study]
title = "Bracket redesign"
significance_level = 0.1

[[case_studies]]
component_name = "Bracket A"
process = "FDM"
iterations_conventional = 6
iterations_dfam = 2
roughness_conventional = 22.0
roughness_dfam = 18.5
error_conventional = 0.25
error_dfam = 0.15

[[case_studies]]
component_name = "Bracket B"
process = "SLS"
iterations_conventional = 9
iterations_dfam = 4
roughness_conventional = 15.0
roughness_dfam = 12.0
error_conventional = 0.3
error_dfam = 0.18
"#;

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_case_study_row_warns_with_suggestion() {
    let toml_str = r#"
[[case_studies]]
component_nme = "Bracket"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("case_studies.component_name")
    );
}

#[test]
fn typo_in_study_section_warns() {
    let toml_str = r#"
[study]
significance_levl = 0.01
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].field.contains("significance_levl"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("study.significance_level")
    );
}

#[test]
fn valid_config_produces_zero_warnings() {
    let warnings = validate_unknown_keys(TWO_ROW_STUDY);
    assert!(warnings.is_empty(), "Unexpected warnings: {warnings:?}");
}

#[test]
fn every_case_study_field_is_a_known_key() {
    let known = known_config_keys();
    let toml_str = StudyConfig::default().to_toml().unwrap();
    for w in validate_unknown_keys(&toml_str) {
        panic!("serialized default config produced warning: {w}");
    }
    assert!(known.contains("case_studies.process"));
    assert!(suggest_correction("case_studies.proces", &known).is_some());
}

#[test]
fn unknown_keys_do_not_block_loading() {
    let toml_str = format!("{TWO_ROW_STUDY}\n[plotting]\npalette = \"deep\"\n");
    let config = StudyConfig::from_toml_str(&toml_str).unwrap();
    assert_eq!(config.case_studies.len(), 2);
}

// ============================================================================
// Loading & Validation
// ============================================================================

#[test]
fn custom_study_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_ROW_STUDY.as_bytes()).unwrap();

    let config = StudyConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.study.title, "Bracket redesign");
    assert_eq!(config.study.significance_level, 0.1);
    assert_eq!(config.case_studies[0].process, AmProcess::Fdm);
    assert_eq!(config.case_studies[1].label(), "Bracket B (SLS)");
}

#[test]
fn study_section_alone_keeps_builtin_rows() {
    let config = StudyConfig::from_toml_str("[study]\nsignificance_level = 0.01\n").unwrap();
    assert_eq!(config.case_studies, StudyConfig::default().case_studies);
    assert_eq!(config.study.significance_level, 0.01);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StudyConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(..)));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = StudyConfig::from_toml_str("[[case_studies]\nbroken").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(..)));
}

#[test]
fn unknown_process_is_parse_error() {
    let toml_str = TWO_ROW_STUDY.replace("\"FDM\"", "\"SLA\"");
    let err = StudyConfig::from_toml_str(&toml_str).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(..)));
}

#[test]
fn negative_roughness_fails_validation() {
    let toml_str = TWO_ROW_STUDY.replace("roughness_dfam = 18.5", "roughness_dfam = -1.0");
    match StudyConfig::from_toml_str(&toml_str) {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("roughness_dfam")));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn single_case_study_fails_validation() {
    let toml_str = r#"
[[case_studies]]
component_name = "Only"
process = "SLS"
iterations_conventional = 3
iterations_dfam = 2
roughness_conventional = 14.0
roughness_dfam = 12.0
error_conventional = 0.3
error_dfam = 0.2
"#;
    let err = StudyConfig::from_toml_str(toml_str).unwrap_err();
    assert!(err.to_string().contains("at least 2"));
}

#[test]
fn save_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("study_config.toml");
    let config = StudyConfig::from_toml_str(TWO_ROW_STUDY).unwrap();
    config.save_to_file(&path).unwrap();
    assert_eq!(StudyConfig::load_from_file(&path).unwrap(), config);
}

#[test]
fn physical_ranges_clean_for_custom_study() {
    let config = StudyConfig::from_toml_str(TWO_ROW_STUDY).unwrap();
    let (errors, warnings) = validate_physical_ranges(&config);
    assert!(errors.is_empty());
    assert!(warnings.is_empty());
}
