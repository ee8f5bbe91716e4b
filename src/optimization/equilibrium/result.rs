//! Value types produced by an equilibrium solve.
use serde::{Deserialize, Serialize};

/// Coefficients at the angle of attack where the solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AerodynamicResult {
    pub cl: f64,
    pub cdi: f64,
    pub cy: f64,
    pub cm: f64,
    /// Angle of attack in degrees.
    pub alpha: f64,
}

impl AerodynamicResult {
    /// The `{CDi, Cm}` pair the design objective normalizes.
    pub fn targets(&self) -> Targets {
        Targets { cdi: self.cdi, cm: self.cm }
    }
}

/// Induced drag and pitching moment, the two quantities traded off by the
/// design objective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub cdi: f64,
    pub cm: f64,
}
