//! Operating point, free stream and the per-call flight condition.
//!
//! [`OperationPoint`] is the user-facing cruise condition (altitude, Mach,
//! required lift coefficient). It is resolved once against an
//! [`Atmosphere`] into a [`FreeStream`]; the equilibrium search then stamps
//! trial angles of attack onto it to obtain [`FlightCondition`]s for the
//! aerodynamic adapter.
use crate::aero::{
    atmosphere::Atmosphere,
    errors::{AeroError, AeroResult},
};
use serde::{Deserialize, Serialize};

/// Validated cruise condition. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationPoint {
    altitude: f64,
    mach: f64,
    target_cl: f64,
}

impl OperationPoint {
    /// # Errors
    /// [`AeroError::InvalidOperationPoint`] when any value is non-finite or
    /// `mach <= 0`.
    pub fn new(altitude: f64, mach: f64, target_cl: f64) -> AeroResult<Self> {
        if !altitude.is_finite() {
            return Err(AeroError::InvalidOperationPoint {
                field: "altitude",
                value: altitude,
                reason: "Altitude must be finite.",
            });
        }
        if !mach.is_finite() || mach <= 0.0 {
            return Err(AeroError::InvalidOperationPoint {
                field: "mach",
                value: mach,
                reason: "Mach number must be finite and > 0.",
            });
        }
        if !target_cl.is_finite() {
            return Err(AeroError::InvalidOperationPoint {
                field: "target_cl",
                value: target_cl,
                reason: "Target lift coefficient must be finite.",
            });
        }
        Ok(Self { altitude, mach, target_cl })
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn mach(&self) -> f64 {
        self.mach
    }

    pub fn target_cl(&self) -> f64 {
        self.target_cl
    }

    /// Resolve velocity (`mach · a(h)`) and density through one atmosphere
    /// lookup each.
    pub fn free_stream<M: Atmosphere + ?Sized>(&self, atmosphere: &M) -> AeroResult<FreeStream> {
        let velocity = self.mach * atmosphere.speed_of_sound(self.altitude)?;
        let density = atmosphere.density(self.altitude)?;
        FreeStream::new(velocity, density)
    }
}

/// Free-stream state at the operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeStream {
    velocity: f64,
    density: f64,
}

impl FreeStream {
    pub fn new(velocity: f64, density: f64) -> AeroResult<Self> {
        validate_positive("velocity", velocity)?;
        validate_positive("density", density)?;
        Ok(Self { velocity, density })
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Flight condition at angle of attack `alpha` (deg).
    pub fn at_alpha(&self, alpha: f64) -> AeroResult<FlightCondition> {
        if !alpha.is_finite() {
            return Err(AeroError::InvalidFlightCondition {
                field: "alpha",
                value: alpha,
                reason: "Angle of attack must be finite.",
            });
        }
        Ok(FlightCondition { velocity: self.velocity, alpha, density: self.density })
    }
}

/// Operating condition handed to an aerodynamic adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightCondition {
    pub velocity: f64,
    /// Angle of attack in degrees.
    pub alpha: f64,
    pub density: f64,
}

impl FlightCondition {
    pub fn dynamic_pressure(&self) -> f64 {
        0.5 * self.density * self.velocity * self.velocity
    }
}

fn validate_positive(field: &'static str, value: f64) -> AeroResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AeroError::InvalidFlightCondition {
            field,
            value,
            reason: "Value must be finite and > 0.",
        });
    }
    Ok(())
}
