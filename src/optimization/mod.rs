//! optimization — equilibrium solves, design search, and unified errors.
//!
//! Purpose
//! -------
//! Provide the two nested optimization loops of a winglet study: an inner
//! one-dimensional search that trims a geometry to a lift coefficient, and an
//! outer bounded search over winglet parameters that trades induced drag
//! against pitching moment. Both are backed by `argmin`.
//!
//! Key behaviors
//! -------------
//! - [`equilibrium`]: bracket + Brent search for the angle of attack that
//!   meets a target CL.
//! - [`design`]: design parametrization, the [`WingletOptimizer`] state
//!   machine, L-BFGS / Nelder–Mead runners and the run record.
//! - [`sweep`]: independent studies over several interpolation factors.
//! - [`numerical_stability`]: logistic box transform used by the bounded
//!   search.
//! - [`errors`]: the single [`OptError`] / [`OptResult`] surface, which
//!   also wraps geometry and aerodynamic errors unchanged.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inner failures propagate as errors; outer non-convergence is a flag on
//!   the outcome.
//! - Errors raised inside `argmin` callbacks are recovered as the original
//!   crate error, not as an opaque backend error.
//!
//! Conventions
//! -----------
//! - Vectors are `ndarray::Array1<f64>` in `WingletKey` order.
//! - The library performs no I/O; the `obs_slog` feature attaches a terminal
//!   observer to verbose design runs.
//!
//! Downstream usage
//! ----------------
//! - Most callers only need [`prelude`].

pub mod design;
pub mod equilibrium;
pub mod errors;
pub mod numerical_stability;
pub mod sweep;

pub use self::design::{DesignOptions, DesignOutcome, OptimizationRecord, WingletOptimizer};
pub use self::equilibrium::{AerodynamicResult, EquilibriumOptions, EquilibriumSolver, Targets};
pub use self::errors::{OptError, OptResult};
pub use self::sweep::{SweepConfig, SweepEntry, run_sweep};

pub mod prelude {
    pub use super::design::{
        DesignBounds, DesignOptions, DesignOutcome, LineSearcher, OptimizationRecord,
        PhysicalBounds, SearchMethod, Tolerances, WingletOptimizer,
    };
    pub use super::equilibrium::{AerodynamicResult, EquilibriumOptions, Targets};
    pub use super::errors::{OptError, OptResult};
    pub use super::sweep::{SweepConfig, SweepEntry, run_sweep};
}
