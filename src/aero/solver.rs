//! The aerodynamic solver seam.
//!
//! The optimizer treats aerodynamics as a black box: given a wing and a
//! flight condition, an [`AeroSolver`] returns total force and moment
//! coefficients. Implementations must be deterministic; the equilibrium
//! search relies on repeated calls at the same angle of attack agreeing.
use crate::{
    aero::{
        errors::{AeroError, AeroResult},
        operation::FlightCondition,
    },
    geometry::wing::FlyingWing,
};
use serde::{Deserialize, Serialize};

/// Total coefficients for one aerodynamic evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AeroCoefficients {
    /// Lift coefficient.
    pub cl: f64,
    /// Induced drag coefficient.
    pub cdi: f64,
    /// Side-force coefficient.
    pub cy: f64,
    /// Pitching-moment coefficient.
    pub cm: f64,
}

impl AeroCoefficients {
    /// Reject NaN/±inf coefficients, naming the first offender.
    pub fn validate(&self) -> AeroResult<()> {
        for (name, value) in [("cl", self.cl), ("cdi", self.cdi), ("cy", self.cy), ("cm", self.cm)] {
            if !value.is_finite() {
                return Err(AeroError::NonFiniteCoefficient { name, value });
            }
        }
        Ok(())
    }
}

/// Aerodynamic adapter evaluated by the equilibrium solver.
pub trait AeroSolver {
    fn evaluate(&self, wing: &FlyingWing, condition: &FlightCondition)
    -> AeroResult<AeroCoefficients>;
}

impl<T: AeroSolver + ?Sized> AeroSolver for &T {
    fn evaluate(
        &self, wing: &FlyingWing, condition: &FlightCondition,
    ) -> AeroResult<AeroCoefficients> {
        (**self).evaluate(wing, condition)
    }
}

impl<T: AeroSolver + ?Sized> AeroSolver for Box<T> {
    fn evaluate(
        &self, wing: &FlyingWing, condition: &FlightCondition,
    ) -> AeroResult<AeroCoefficients> {
        (**self).evaluate(wing, condition)
    }
}
