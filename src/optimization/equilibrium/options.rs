//! Configuration for the constant-lift angle-of-attack search.
use crate::optimization::errors::{OptError, OptResult};

/// Default iteration cap shared by bracketing and Brent's method.
pub const DEFAULT_EQ_MAX_ITER: u64 = 1000;
/// Default initial bracket in degrees.
pub const DEFAULT_BRACKET: (f64, f64) = (0.0, 1.0);
/// Default limit on parabolic extrapolation relative to the last step.
pub const DEFAULT_GROW_LIMIT: f64 = 110.0;
/// Default absolute tolerance on alpha for Brent's method (degrees).
pub const DEFAULT_TOL_ALPHA: f64 = 1e-10;

/// Options for [`EquilibriumSolver`](super::EquilibriumSolver).
///
/// - `max_iter`: cap on bracketing steps and on Brent iterations (each
///   stage separately).
/// - `bracket`: two starting angles (deg) for the downhill bracket search.
/// - `grow_limit`: maximum parabolic extrapolation, in multiples of the
///   current step.
/// - `tol_alpha`: absolute alpha tolerance handed to Brent's method.
/// - `cl_tolerance`: when set, a converged alpha whose `|CL − target|`
///   exceeds it is reported as a convergence failure. `None` accepts
///   whatever minimum of the residual Brent's method finds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumOptions {
    pub max_iter: u64,
    pub bracket: (f64, f64),
    pub grow_limit: f64,
    pub tol_alpha: f64,
    pub cl_tolerance: Option<f64>,
}

impl EquilibriumOptions {
    /// Build validated options.
    ///
    /// # Errors
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    /// - [`OptError::InvalidBracket`] for non-finite or coincident points.
    /// - [`OptError::InvalidGrowLimit`] unless `grow_limit` is finite and > 1.
    /// - [`OptError::InvalidTolAlpha`] / [`OptError::InvalidClTolerance`]
    ///   for non-finite or non-positive tolerances.
    pub fn new(
        max_iter: u64, bracket: (f64, f64), grow_limit: f64, tol_alpha: f64,
        cl_tolerance: Option<f64>,
    ) -> OptResult<Self> {
        if max_iter == 0 {
            return Err(OptError::InvalidMaxIter {
                max_iter: 0,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        let (lower, upper) = bracket;
        if !lower.is_finite() || !upper.is_finite() {
            return Err(OptError::InvalidBracket {
                lower,
                upper,
                reason: "Bracket points must be finite.",
            });
        }
        if lower == upper {
            return Err(OptError::InvalidBracket {
                lower,
                upper,
                reason: "Bracket points must be distinct.",
            });
        }
        if !grow_limit.is_finite() || grow_limit <= 1.0 {
            return Err(OptError::InvalidGrowLimit {
                value: grow_limit,
                reason: "Growth limit must be finite and greater than one.",
            });
        }
        if !tol_alpha.is_finite() || tol_alpha <= 0.0 {
            return Err(OptError::InvalidTolAlpha {
                tol: tol_alpha,
                reason: "Tolerance must be finite and positive.",
            });
        }
        if let Some(tol) = cl_tolerance {
            if !tol.is_finite() || tol <= 0.0 {
                return Err(OptError::InvalidClTolerance {
                    tol,
                    reason: "Tolerance must be finite and positive.",
                });
            }
        }
        Ok(Self { max_iter, bracket, grow_limit, tol_alpha, cl_tolerance })
    }
}

impl Default for EquilibriumOptions {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_EQ_MAX_ITER,
            bracket: DEFAULT_BRACKET,
            grow_limit: DEFAULT_GROW_LIMIT,
            tol_alpha: DEFAULT_TOL_ALPHA,
            cl_tolerance: None,
        }
    }
}
