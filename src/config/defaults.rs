//! System-wide default constants and the built-in case-study table.

use crate::types::{AmProcess, CaseStudy};

// ============================================================================
// Config Discovery
// ============================================================================

/// Environment variable naming a study config TOML file.
pub const CONFIG_ENV_VAR: &str = "DFAM_CONFIG";

/// Study config looked up in the current working directory.
pub const DEFAULT_CONFIG_FILE: &str = "study_config.toml";

// ============================================================================
// Analysis
// ============================================================================

/// Significance level (alpha) for the paired t-tests.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Report title when the config does not set one.
pub const DEFAULT_STUDY_TITLE: &str = "Conventional vs. DfAM Case Studies";

// ============================================================================
// Plausibility (warnings only)
// ============================================================================

/// Ra above this is unusual for SLS/FDM plastic parts (µm).
pub const MAX_TYPICAL_ROUGHNESS_UM: f64 = 100.0;

/// Dimensional error above this is unusual for the studied parts (mm).
pub const MAX_TYPICAL_ERROR_MM: f64 = 5.0;

/// More design iterations than this usually means a data-entry slip.
pub const MAX_TYPICAL_ITERATIONS: u32 = 100;

// ============================================================================
// Built-in Dataset
// ============================================================================

/// The four case-study components: two SLS parts and two FDM parts.
pub fn default_case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            component_name: "Satellite Structure".to_string(),
            process: AmProcess::Sls,
            iterations_conventional: 7,
            iterations_dfam: 3,
            roughness_conventional: 14.0,
            roughness_dfam: 12.0,
            error_conventional: 0.3,
            error_dfam: 0.2,
        },
        CaseStudy {
            component_name: "Hydrofoil Part".to_string(),
            process: AmProcess::Fdm,
            iterations_conventional: 10,
            iterations_dfam: 3,
            roughness_conventional: 30.0,
            roughness_dfam: 25.0,
            error_conventional: 0.2,
            error_dfam: 0.14,
        },
        CaseStudy {
            component_name: "Aerofoil Part".to_string(),
            process: AmProcess::Fdm,
            iterations_conventional: 12,
            iterations_dfam: 4,
            roughness_conventional: 28.0,
            roughness_dfam: 24.0,
            error_conventional: 0.2,
            error_dfam: 0.13,
        },
        CaseStudy {
            component_name: "Biomimetic Spring".to_string(),
            process: AmProcess::Sls,
            iterations_conventional: 15,
            iterations_dfam: 5,
            roughness_conventional: 14.0,
            roughness_dfam: 12.0,
            error_conventional: 0.3,
            error_dfam: 0.2,
        },
    ]
}
