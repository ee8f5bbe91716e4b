//! design::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the vector types and `argmin` solver aliases used by the
//! design optimizer so the rest of the layer stays agnostic to `ndarray`
//! and `argmin` generics.
//!
//! Conventions
//! -----------
//! - [`DesignVector`] holds dimensionless multipliers of the baseline
//!   winglet parameters, one per [`WingletKey`](crate::geometry::WingletKey),
//!   in key order.
//! - [`Theta`] is the unconstrained search coordinate the solvers see; the
//!   box transform in [`parametrization`](super::parametrization) maps it to
//!   a [`DesignVector`].
//! - `Cost` is always the scalarized objective `J` (lower is better).
use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    neldermead::NelderMead,
    quasinewton::LBFGS,
};
use ndarray::Array1;
use std::collections::HashMap;

/// Multipliers of the baseline winglet parameters (length 7, baseline all ones).
pub type DesignVector = Array1<f64>;

/// Unconstrained search coordinates seen by the `argmin` solvers.
pub type Theta = Array1<f64>;

/// Gradient of the objective with respect to [`Theta`].
pub type Grad = Array1<f64>;

/// Scalarized objective value.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default history size (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Default outer iteration cap.
pub const DEFAULT_DESIGN_MAX_ITER: usize = 50;

/// Default initial simplex edge in [`Theta`] units.
pub const DEFAULT_SIMPLEX_STEP: f64 = 0.5;

/// Hager–Zhang line search specialized to this crate’s numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

/// More–Thuente line search specialized to this crate’s numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS solver wired to the Hager–Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Theta, Grad, Cost>;

/// L-BFGS solver wired to the More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;

/// Derivative-free Nelder–Mead over [`Theta`].
pub type DesignNelderMead = NelderMead<Theta, Cost>;
