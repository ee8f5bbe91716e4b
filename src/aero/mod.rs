//! aero — aerodynamic collaborators of the optimization engine.
//!
//! Purpose
//! -------
//! Define the seams through which the optimizer obtains aerodynamic data:
//! an [`Atmosphere`] for free-stream properties and an [`AeroSolver`] for
//! force and moment coefficients, plus the operating-point types that flow
//! between them.
//!
//! Key behaviors
//! -------------
//! - [`atmosphere`]: [`Atmosphere`] trait and the [`StandardAtmosphere`]
//!   reference model.
//! - [`operation`]: validated [`OperationPoint`], derived [`FreeStream`] and
//!   the per-call [`FlightCondition`].
//! - [`solver`]: the [`AeroSolver`] trait and [`AeroCoefficients`].
//! - [`finite_wing`]: [`FiniteWingModel`], a closed-form reference adapter.
//!
//! Invariants & assumptions
//! ------------------------
//! - Adapters are deterministic and side-effect free.
//! - Errors are reported as [`AeroError`] and are never retried here.

pub mod atmosphere;
pub mod errors;
pub mod finite_wing;
pub mod operation;
pub mod solver;

pub use self::atmosphere::{Atmosphere, StandardAtmosphere};
pub use self::errors::{AeroError, AeroResult};
pub use self::finite_wing::FiniteWingModel;
pub use self::operation::{FlightCondition, FreeStream, OperationPoint};
pub use self::solver::{AeroCoefficients, AeroSolver};
