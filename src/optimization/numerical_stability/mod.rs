//! numerical_stability — guarded transforms for bounded search.
//!
//! Purpose
//! -------
//! Collect the scalar transforms that let an unconstrained solver search a
//! box-constrained design space. The design layer maps each coordinate
//! through [`to_interval`] / [`from_interval`]; everything here is pure and
//! allocation-free.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite `f64`; bound validation happens in the design layer.
//! - [`to_interval`] always returns a value inside `[lo, hi]`.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover tail behavior, symmetry of the
//!   logistic and round trips of the interval maps.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{
    GENERAL_TOL, LOGIT_EPS, from_interval, safe_logistic, safe_logit, to_interval,
};
