//! equilibrium — angle-of-attack search at a prescribed lift coefficient.
//!
//! Purpose
//! -------
//! Trim a fixed geometry to the operating point's lift coefficient. Every
//! design evaluation of the outer optimizer calls into this module once, so
//! it is the inner loop of the engine.
//!
//! Key behaviors
//! -------------
//! - [`EquilibriumSolver::solve_for_angle_of_attack`]: one adapter call at a
//!   given alpha.
//! - [`EquilibriumSolver::solve_for_lift_coefficient`]: minimize
//!   `(CL(α) − CL*)²` over alpha via [`bracket::bracket_minimum`] and
//!   `argmin`'s Brent solver on the [`adapter::LiftResidual`] problem, then
//!   re-solve at the optimum.
//! - [`EquilibriumOptions`] carries the iteration cap, starting bracket,
//!   growth limit and tolerances.
//!
//! Invariants & assumptions
//! ------------------------
//! - The adapter is deterministic: re-solving at the returned alpha yields
//!   the coefficients Brent's method saw.
//! - Failure is always an error ([`OptError::Convergence`] or the adapter's
//!   own error); no partial result is returned and nothing is retried.
//! - By default any residual minimum is accepted, even one where CL misses
//!   the target; set [`EquilibriumOptions::cl_tolerance`] to reject those.
//!
//! Testing notes
//! -------------
//! - Unit tests drive the solver with stub adapters whose lift curves are
//!   known in closed form.
//!
//! [`OptError::Convergence`]: crate::optimization::errors::OptError::Convergence

pub mod adapter;
pub mod bracket;
pub mod options;
pub mod result;
pub mod solver;

/// Reason carried by every equilibrium convergence failure.
pub const NO_EQUILIBRIUM: &str = "no angle of attack found for requested lift coefficient";

pub use self::options::EquilibriumOptions;
pub use self::result::{AerodynamicResult, Targets};
pub use self::solver::EquilibriumSolver;
