//! aero::finite_wing — lifting-line style reference adapter.
//!
//! Purpose
//! -------
//! Give the optimizer a cheap, deterministic [`AeroSolver`] that responds to
//! every winglet parameter, so the engine can run end to end without an
//! external panel or vortex-lattice code.
//!
//! Key behaviors
//! -------------
//! - Lift slope from the Helmbold relation on the geometric aspect ratio of
//!   the wing plus the horizontal projection of the winglets.
//! - Effective angle of attack adds the area-weighted twist of wing and
//!   winglets.
//! - Span efficiency grows with winglet height through
//!   `AR_eff = AR_geom · (1 + k_w · h / b)`.
//! - Induced drag `CDi = CL² / (π e AR_eff)`.
//! - Pitching moment about the origin, `Cm = −CL · x_ac / MAC`, with `x_ac`
//!   the area-weighted quarter-chord position of wing and winglets.
//! - Side force is zero for the symmetric configuration.
//!
//! Invariants & assumptions
//! ------------------------
//! - Coefficients depend on geometry and `alpha` only; velocity and density
//!   enter through the validated [`FlightCondition`] but do not change them.
//! - Outputs are finite or an [`AeroError::NonFiniteCoefficient`] is returned.
use crate::{
    aero::{
        errors::{AeroError, AeroResult},
        operation::FlightCondition,
        solver::{AeroCoefficients, AeroSolver},
    },
    geometry::wing::FlyingWing,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default Oswald efficiency of the clean wing.
pub const DEFAULT_OSWALD: f64 = 0.9;
/// Default height-to-span sensitivity of the effective aspect ratio.
pub const DEFAULT_WINGLET_FACTOR: f64 = 1.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiniteWingModel {
    oswald: f64,
    winglet_factor: f64,
}

impl FiniteWingModel {
    /// # Errors
    /// [`AeroError::DegenerateGeometry`] if `oswald` is not in `(0, 1]` or
    /// `winglet_factor` is negative or non-finite.
    pub fn new(oswald: f64, winglet_factor: f64) -> AeroResult<Self> {
        if !(oswald.is_finite() && oswald > 0.0 && oswald <= 1.0) {
            return Err(AeroError::DegenerateGeometry {
                reason: "Oswald efficiency must lie in (0, 1].",
            });
        }
        if !(winglet_factor.is_finite() && winglet_factor >= 0.0) {
            return Err(AeroError::DegenerateGeometry {
                reason: "Winglet factor must be finite and >= 0.",
            });
        }
        Ok(Self { oswald, winglet_factor })
    }

    pub fn oswald(&self) -> f64 {
        self.oswald
    }

    pub fn winglet_factor(&self) -> f64 {
        self.winglet_factor
    }
}

impl Default for FiniteWingModel {
    fn default() -> Self {
        Self { oswald: DEFAULT_OSWALD, winglet_factor: DEFAULT_WINGLET_FACTOR }
    }
}

/// Helmbold lift-curve slope per radian.
pub fn helmbold_lift_slope(aspect_ratio: f64) -> f64 {
    2.0 * PI * aspect_ratio / (2.0 + (4.0 + aspect_ratio * aspect_ratio).sqrt())
}

impl AeroSolver for FiniteWingModel {
    fn evaluate(
        &self, wing: &FlyingWing, condition: &FlightCondition,
    ) -> AeroResult<AeroCoefficients> {
        let planform = wing.planform();
        let span = planform.span();
        let area = planform.reference_area();
        let mac = planform.mean_aerodynamic_chord();
        if !(span > 0.0 && mac > 0.0) {
            return Err(AeroError::DegenerateGeometry {
                reason: "Span and mean aerodynamic chord must be positive.",
            });
        }

        let (lateral, height, winglet_area, winglet_twist, winglet_xac) = match wing.winglet() {
            Some(w) => (
                w.lateral_extent().max(0.0),
                w.height().abs(),
                2.0 * w.projected_area(),
                w.mean_twist(),
                w.quarter_chord_x(),
            ),
            None => (0.0, 0.0, 0.0, 0.0, 0.0),
        };

        let lifting_area = area + winglet_area;
        let effective_span = span + 2.0 * lateral;
        let ar_geom = effective_span * effective_span / lifting_area;
        let ar_eff = ar_geom * (1.0 + self.winglet_factor * height / span);

        let twist =
            (planform.mean_twist() * area + winglet_twist * winglet_area) / lifting_area;
        let alpha_eff = (condition.alpha + twist).to_radians();
        let cl = helmbold_lift_slope(ar_geom) * alpha_eff * lifting_area / area;
        let cdi = cl * cl / (PI * self.oswald * ar_eff);

        let x_ac = (planform.aerodynamic_center_x() * area + winglet_xac * winglet_area)
            / lifting_area;
        let cm = -cl * x_ac / mac;

        let coefficients = AeroCoefficients { cl, cdi, cy: 0.0, cm };
        coefficients.validate()?;
        Ok(coefficients)
    }
}
