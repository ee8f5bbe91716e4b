//! design — bounded, argmin-powered winglet design search.
//!
//! Purpose
//! -------
//! Find the winglet parameters that minimize a weighted trade-off between
//! induced drag and pitching moment at a fixed lift coefficient. Callers
//! build a [`WingletOptimizer`], capture a baseline with `put_up`, optionally
//! set physical bounds, and call `optimize`.
//!
//! Key behaviors
//! -------------
//! - [`parametrization`]: design vector ↔ winglet parameters, physical →
//!   multiplier bounds, and the logistic box transform.
//! - [`adapter::BoundedObjective`]: exposes `J(to_bounded(z))` and its
//!   finite-difference gradient to `argmin`.
//! - [`builders`] / [`run`]: L-BFGS (More–Thuente or Hager–Zhang) and
//!   Nelder–Mead construction and execution.
//! - [`minimize_design`]: selects the solver from [`DesignOptions`].
//! - [`artifact::OptimizationRecord`]: serde-serializable run summary.
//!
//! Invariants & assumptions
//! ------------------------
//! - The outer search minimizes `J` directly.
//! - Trial points always lie inside the multiplier box; the solvers only
//!   ever see unconstrained coordinates.
//! - Inner failures (geometry, equilibrium, adapter) abort the run as
//!   errors; outer non-convergence is reported through
//!   [`DesignOutcome::success`].
//!
//! Conventions
//! -----------
//! - Vectors follow `WingletKey::ALL` ordering.
//! - Errors are [`OptResult`](crate::optimization::errors::OptResult) values;
//!   nothing in this module panics on bad input.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; end-to-end runs against the
//!   reference finite-wing model are in `tests/`.

pub mod adapter;
pub mod api;
pub mod artifact;
pub mod builders;
pub mod optimizer;
pub mod options;
pub mod parametrization;
pub mod run;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize_design;
pub use self::artifact::OptimizationRecord;
pub use self::optimizer::{DesignState, ObjectiveEvaluation, OptimizationState, WingletOptimizer};
pub use self::options::{DesignOptions, DesignOutcome, LineSearcher, SearchMethod, Tolerances};
pub use self::parametrization::{
    DEFAULT_MULTIPLIER_BOUNDS, DesignBounds, PhysicalBounds, bounds_to_multiplier_space,
    parameters_to_vector, vector_to_parameters,
};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, DesignVector, FnEvalMap, Grad, Theta};
