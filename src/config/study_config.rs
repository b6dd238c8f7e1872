//! Study Configuration - case-study rows and analysis settings as TOML
//!
//! Every section is `#[serde(default)]`, so an empty file reproduces the
//! built-in study exactly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults::{
    default_case_studies, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, DEFAULT_SIGNIFICANCE_LEVEL,
    DEFAULT_STUDY_TITLE,
};
use crate::dataset::{Dataset, DatasetError};
use crate::types::CaseStudy;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one comparison study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Report title and test settings
    #[serde(default)]
    pub study: StudyInfo,

    /// Case-study rows; defaults to the built-in four components
    #[serde(default = "default_case_studies")]
    pub case_studies: Vec<CaseStudy>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            study: StudyInfo::default(),
            case_studies: default_case_studies(),
        }
    }
}

impl StudyConfig {
    /// Load configuration using the standard search order:
    /// 1. `$DFAM_CONFIG` environment variable
    /// 2. `./study_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), cases = config.case_studies.len(), "Loaded study config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        // 2. Check ./study_config.toml
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(cases = config.case_studies.len(), "Loaded study config from ./{}", DEFAULT_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", DEFAULT_CONFIG_FILE);
                }
            }
        }

        // 3. Defaults
        info!("No study config found, using built-in case studies");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse_and_validate(&contents, &path.display().to_string())
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys only warn; parse and validation failures are errors.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::parse_and_validate(contents, "<inline>")
    }

    fn parse_and_validate(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        // Two-pass: check for unknown keys first (warnings only)
        for w in &super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(origin.to_string(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Study config saved");
        Ok(())
    }

    /// Build the immutable dataset the pipeline runs on.
    pub fn dataset(&self) -> Result<Dataset, DatasetError> {
        Dataset::from_case_studies(self.case_studies.clone())
    }

    /// Validate settings and every case-study row.
    ///
    /// Rules:
    /// - Significance level must lie strictly between 0 and 1
    /// - At least 2 case studies (sample variance needs n >= 2)
    /// - Component labels must be non-empty and unique
    /// - Roughness and dimensional error must be finite and non-negative
    /// - Iteration counts must be > 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        let alpha = self.study.significance_level;
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            errors.push(format!(
                "study.significance_level = {alpha} must be within (0, 1)"
            ));
        }

        if self.case_studies.len() < crate::stats::MIN_OBSERVATIONS {
            errors.push(format!(
                "case_studies: need at least {} rows for a paired t-test, got {}",
                crate::stats::MIN_OBSERVATIONS,
                self.case_studies.len()
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for (i, cs) in self.case_studies.iter().enumerate() {
            if cs.component_name.trim().is_empty() {
                errors.push(format!("case_studies[{i}].component_name must not be empty"));
            } else if !seen.insert(cs.label()) {
                errors.push(format!(
                    "case_studies[{i}]: duplicate component '{}'",
                    cs.label()
                ));
            }
        }

        // Physical range validation
        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({0:?}): {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({0}): {1}")]
    Parse(String, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Study Info
// ============================================================================

/// Report metadata and test settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyInfo {
    /// Report title
    #[serde(default = "default_title")]
    pub title: String,

    /// Alpha for the two-sided paired t-tests
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,
}

fn default_title() -> String {
    DEFAULT_STUDY_TITLE.to_string()
}

const fn default_significance_level() -> f64 {
    DEFAULT_SIGNIFICANCE_LEVEL
}

impl Default for StudyInfo {
    fn default() -> Self {
        Self {
            title: default_title(),
            significance_level: default_significance_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StudyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.case_studies.len(), 4);
        assert_eq!(config.study.significance_level, 0.05);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = StudyConfig::from_toml_str("").unwrap();
        assert_eq!(config, StudyConfig::default());
    }

    #[test]
    fn test_toml_roundtrip_preserves_rows() {
        let config = StudyConfig::default();
        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("[[case_studies]]"));
        assert!(toml_str.contains("process = \"SLS\""));
        let back = StudyConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_alpha_out_of_range_rejected() {
        let mut config = StudyConfig::default();
        config.study.significance_level = 1.5;
        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("significance_level")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_single_row_rejected() {
        let mut config = StudyConfig::default();
        config.case_studies.truncate(1);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let mut config = StudyConfig::default();
        let dup = config.case_studies[1].clone();
        config.case_studies.push(dup);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate component 'Hydrofoil Part (FDM)'"));
    }

    #[test]
    fn test_blank_component_name_rejected() {
        let mut config = StudyConfig::default();
        config.case_studies[0].component_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dataset_from_config() {
        let ds = StudyConfig::default().dataset().unwrap();
        assert_eq!(ds.len(), 4);
    }
}
