//! winglets — winglet design optimization for flying wings.
//!
//! Purpose
//! -------
//! Choose winglet geometry for a flying wing by nesting two searches: an
//! inner angle-of-attack search that trims each candidate geometry to a
//! required lift coefficient, and an outer bounded search over seven winglet
//! parameters that minimizes a weighted blend of normalized induced drag and
//! normalized pitching moment.
//!
//! Key behaviors
//! -------------
//! - [`geometry`]: sections, planforms, the winglet parameter set and the
//!   surface built from it, and the [`geometry::FlyingWing`] that carries
//!   both.
//! - [`aero`]: operating points, the standard atmosphere, the
//!   [`aero::AeroSolver`] adapter seam and a reference finite-wing model.
//! - [`optimization`]: the equilibrium solver, the design optimizer state
//!   machine, batch sweeps over interpolation factors and the unified error
//!   surface.
//! - [`utils`]: a reference wing, winglet, bounds and cruise point.
//!
//! Invariants & assumptions
//! ------------------------
//! - Angles are in degrees; lengths and altitude are in metres.
//! - Geometries are immutable values except for the target wing's winglet,
//!   which the optimizer replaces wholesale on every evaluation.
//! - Aerodynamic adapters are deterministic.
//!
//! Conventions
//! -----------
//! - Each layer has its own error enum and `Result` alias; the optimization
//!   layer wraps the others unchanged in [`optimization::OptError`].
//! - No I/O or logging by default. Enable the `obs_slog` feature and set
//!   `DesignOptions::verbose` to stream solver progress to the terminal.
//!
//! Downstream usage
//! ----------------
//! ```no_run
//! use winglets::prelude::*;
//! use winglets::utils::{base_lower_bounds, base_operation_point, base_upper_bounds, base_wing, target_wing};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let aero = FiniteWingModel::default();
//! let mut optimizer = WingletOptimizer::new(
//!     &aero,
//!     &StandardAtmosphere,
//!     base_wing()?,
//!     target_wing(false)?,
//!     base_operation_point()?,
//!     0.5,
//!     EquilibriumOptions::default(),
//! )?;
//! optimizer.put_up()?;
//! optimizer.set_bounds(&base_lower_bounds(), &base_upper_bounds())?;
//! optimizer.optimize(&DesignOptions::default())?;
//! println!("{}", optimizer.record()?.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; `tests/` runs full studies against
//!   the reference finite-wing model.

pub mod aero;
pub mod geometry;
pub mod optimization;
pub mod utils;

pub mod prelude {
    pub use crate::aero::{
        AeroCoefficients, AeroSolver, Atmosphere, FiniteWingModel, FlightCondition,
        OperationPoint, StandardAtmosphere,
    };
    pub use crate::geometry::{
        FlyingWing, Point3, Section, WingletKey, WingletParameters, WingletSurface,
    };
    pub use crate::optimization::prelude::*;
}
