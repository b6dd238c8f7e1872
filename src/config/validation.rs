//! Config validation: unknown-key detection with Levenshtein suggestions
//! and plausibility checks on case-study values.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree (including every `[[case_studies]]` row), compare
//! against known field names, and emit warnings with "did you mean?"
//! suggestions. Then proceed with normal serde deserialization. Warnings
//! never break existing configs.

use std::collections::HashSet;

use super::defaults::{MAX_TYPICAL_ERROR_MM, MAX_TYPICAL_ITERATIONS, MAX_TYPICAL_ROUGHNESS_UM};

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `StudyConfig`.
///
/// Keys inside `[[case_studies]]` rows share the `case_studies.` prefix.
/// Any new field added to `StudyConfig` or `CaseStudy` must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [study]
        "study",
        "study.title",
        "study.significance_level",
        // [[case_studies]]
        "case_studies",
        "case_studies.component_name",
        "case_studies.process",
        "case_studies.iterations_conventional",
        "case_studies.iterations_dfam",
        "case_studies.roughness_conventional",
        "case_studies.roughness_dfam",
        "case_studies.error_conventional",
        "case_studies.error_dfam",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields
/// `["a", "a.b", "a.c"]`. Arrays of tables are walked row by row under the
/// array's own path, so a key repeated across rows appears once per row.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            match v {
                toml::Value::Table(_) => keys.extend(walk_toml_keys(v, &path)),
                toml::Value::Array(rows) => {
                    for row in rows.iter().filter(|r| r.is_table()) {
                        keys.extend(walk_toml_keys(row, &path));
                    }
                }
                _ => {}
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties resolve to the lexicographically smallest key so suggestions are stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|&(dist, _)| dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys, it only warns. A typo repeated in
/// several case-study rows is reported once.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    let mut reported = HashSet::new();
    let mut warnings = Vec::new();

    for key in walk_toml_keys(&value, "") {
        if known.contains(key.as_str()) || !reported.insert(key.clone()) {
            continue;
        }
        let suggestion = suggest_correction(&key, &known);
        warnings.push(ValidationWarning {
            message: format!("Unknown config key '{key}'"),
            field: key,
            suggestion,
        });
    }

    warnings
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Validate physical ranges on a parsed `StudyConfig`.
///
/// Returns (errors, warnings). Errors are impossible values that must stop
/// the analysis; warnings are suspicious but not fatal.
pub fn validate_physical_ranges(
    config: &super::StudyConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (i, cs) in config.case_studies.iter().enumerate() {
        let row = format!("case_studies[{i}] ({})", cs.label());

        for (name, value) in [
            ("roughness_conventional", cs.roughness_conventional),
            ("roughness_dfam", cs.roughness_dfam),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("{row}.{name} = {value} must be a finite, non-negative Ra"));
            } else if value > MAX_TYPICAL_ROUGHNESS_UM {
                warnings.push(ValidationWarning {
                    field: format!("case_studies.{name}"),
                    message: format!(
                        "{row}.{name} = {value:.1} is outside typical range (0-{MAX_TYPICAL_ROUGHNESS_UM} µm)"
                    ),
                    suggestion: None,
                });
            }
        }

        for (name, value) in [
            ("error_conventional", cs.error_conventional),
            ("error_dfam", cs.error_dfam),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("{row}.{name} = {value} must be a finite, non-negative error"));
            } else if value > MAX_TYPICAL_ERROR_MM {
                warnings.push(ValidationWarning {
                    field: format!("case_studies.{name}"),
                    message: format!(
                        "{row}.{name} = {value:.2} is outside typical range (0-{MAX_TYPICAL_ERROR_MM} mm)"
                    ),
                    suggestion: None,
                });
            }
        }

        for (name, value) in [
            ("iterations_conventional", cs.iterations_conventional),
            ("iterations_dfam", cs.iterations_dfam),
        ] {
            if value == 0 {
                errors.push(format!("{row}.{name} must be > 0 (a part needs at least one design)"));
            } else if value > MAX_TYPICAL_ITERATIONS {
                warnings.push(ValidationWarning {
                    field: format!("case_studies.{name}"),
                    message: format!(
                        "{row}.{name} = {value} is outside typical range (1-{MAX_TYPICAL_ITERATIONS})"
                    ),
                    suggestion: None,
                });
            }
        }
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
