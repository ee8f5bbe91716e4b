//! Serializable record of one finished design run.
//!
//! The record is what a study persists per interpolation factor: enough to
//! rebuild the optimal winglet and to compare runs without re-solving.
use crate::{
    geometry::winglet::WingletParameters,
    optimization::{
        design::{parametrization::DesignBounds, types::DesignVector},
        equilibrium::{AerodynamicResult, Targets},
        errors::OptResult,
    },
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRecord {
    /// Weight `k` of induced drag in the objective.
    pub interpolation_factor: f64,
    /// Optimal multipliers of the baseline winglet parameters.
    pub design_vector: DesignVector,
    /// Physical winglet parameters at the optimum.
    pub parameters: WingletParameters,
    pub bounds: DesignBounds,
    /// Base-wing `{CDi, Cm}` used for normalization.
    pub baseline: Targets,
    /// Target-wing `{CDi, Cm}` at the optimum.
    pub optimum: Targets,
    /// Full trimmed state at the optimum, including alpha.
    pub aerodynamics: AerodynamicResult,
    pub objective: f64,
    pub success: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: BTreeMap<String, u64>,
}

impl OptimizationRecord {
    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// `OptError::Serialization` if encoding fails.
    pub fn to_json(&self) -> OptResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    /// `OptError::Serialization` for malformed or incomplete JSON.
    pub fn from_json(text: &str) -> OptResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{optimization::errors::OptError, utils::base_winglet_parameters};
    use ndarray::Array1;

    fn record() -> OptimizationRecord {
        OptimizationRecord {
            interpolation_factor: 0.25,
            design_vector: Array1::from(vec![1.0, 0.5, 1.25, 1.0, 0.75, 1.0, 1.0]),
            parameters: base_winglet_parameters(false),
            bounds: DesignBounds::default(),
            baseline: Targets { cdi: 0.0125, cm: -0.5 },
            optimum: Targets { cdi: 0.01, cm: -0.25 },
            aerodynamics: AerodynamicResult {
                cl: 0.45,
                cdi: 0.01,
                cy: 0.0,
                cm: -0.25,
                alpha: 4.5,
            },
            objective: 0.7,
            success: true,
            status: "Terminated(SolverConverged)".to_string(),
            iterations: 12,
            fn_evals: BTreeMap::from([("cost_count".to_string(), 40), ("gradient_count".to_string(), 13)]),
        }
    }

    #[test]
    // Purpose
    // -------
    // A record survives a JSON round trip unchanged.
    //
    // Given
    // -----
    // - A record with short decimal values.
    //
    // Expect
    // ------
    // - from_json(to_json(r)) == r; the JSON names the airfoil.
    fn record_round_trips_through_json() {
        // Arrange
        let original = record();

        // Act
        let text = original.to_json().expect("encodes");
        let decoded = OptimizationRecord::from_json(&text).expect("decodes");

        // Assert
        assert_eq!(decoded, original);
        assert!(text.contains("naca0012"));
    }

    #[test]
    // Purpose
    // -------
    // Malformed JSON is reported as a serialization error.
    //
    // Given
    // -----
    // - A JSON object missing every field.
    //
    // Expect
    // ------
    // - `OptError::Serialization`.
    fn malformed_json_is_a_serialization_error() {
        // Act
        let result = OptimizationRecord::from_json("{}");

        // Assert
        assert!(matches!(result, Err(OptError::Serialization { .. })));
    }
}
