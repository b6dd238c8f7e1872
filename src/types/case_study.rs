//! Case-study components measured under both design approaches.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Approach, Metric};

/// Additive manufacturing process the component was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AmProcess {
    /// Selective Laser Sintering (plastic powder bed)
    Sls,
    /// Fused Deposition Modeling (plastic filament)
    Fdm,
}

impl fmt::Display for AmProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sls => write!(f, "SLS"),
            Self::Fdm => write!(f, "FDM"),
        }
    }
}

/// One component measured under the Conventional and DfAM approaches.
///
/// Field names follow the study config layout, so a `[[case_studies]]`
/// table deserializes straight into this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    /// Component name without the process suffix, e.g. "Hydrofoil Part"
    pub component_name: String,

    /// Process the part was printed with
    pub process: AmProcess,

    /// Design iterations, conventional workflow
    pub iterations_conventional: u32,
    /// Design iterations, DfAM workflow
    pub iterations_dfam: u32,

    /// Surface roughness Ra (µm), conventional
    pub roughness_conventional: f64,
    /// Surface roughness Ra (µm), DfAM
    pub roughness_dfam: f64,

    /// Dimensional error (mm), conventional
    pub error_conventional: f64,
    /// Dimensional error (mm), DfAM
    pub error_dfam: f64,
}

impl CaseStudy {
    /// Display label used on chart category axes, e.g. "Hydrofoil Part (FDM)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.component_name, self.process)
    }

    /// Measured value for one metric under one approach.
    pub fn value(&self, metric: Metric, approach: Approach) -> f64 {
        match (metric, approach) {
            (Metric::Iterations, Approach::Conventional) => f64::from(self.iterations_conventional),
            (Metric::Iterations, Approach::DfAM) => f64::from(self.iterations_dfam),
            (Metric::SurfaceRoughness, Approach::Conventional) => self.roughness_conventional,
            (Metric::SurfaceRoughness, Approach::DfAM) => self.roughness_dfam,
            (Metric::DimensionalError, Approach::Conventional) => self.error_conventional,
            (Metric::DimensionalError, Approach::DfAM) => self.error_dfam,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydrofoil() -> CaseStudy {
        CaseStudy {
            component_name: "Hydrofoil Part".to_string(),
            process: AmProcess::Fdm,
            iterations_conventional: 10,
            iterations_dfam: 3,
            roughness_conventional: 30.0,
            roughness_dfam: 25.0,
            error_conventional: 0.2,
            error_dfam: 0.14,
        }
    }

    #[test]
    fn test_label_appends_process() {
        assert_eq!(hydrofoil().label(), "Hydrofoil Part (FDM)");
    }

    #[test]
    fn test_value_lookup_covers_every_column() {
        let cs = hydrofoil();
        assert_eq!(cs.value(Metric::Iterations, Approach::Conventional), 10.0);
        assert_eq!(cs.value(Metric::Iterations, Approach::DfAM), 3.0);
        assert_eq!(cs.value(Metric::SurfaceRoughness, Approach::Conventional), 30.0);
        assert_eq!(cs.value(Metric::SurfaceRoughness, Approach::DfAM), 25.0);
        assert_eq!(cs.value(Metric::DimensionalError, Approach::Conventional), 0.2);
        assert_eq!(cs.value(Metric::DimensionalError, Approach::DfAM), 0.14);
    }

    #[test]
    fn test_process_deserializes_from_uppercase() {
        let p: AmProcess = toml::Value::String("SLS".into()).try_into().unwrap();
        assert_eq!(p, AmProcess::Sls);
    }
}
