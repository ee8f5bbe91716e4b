//! Configuration and result types for the outer design search.
//!
//! - [`SearchMethod`]: gradient-based L-BFGS or derivative-free Nelder–Mead.
//! - [`LineSearcher`]: line search used by L-BFGS.
//! - [`Tolerances`] and [`DesignOptions`]: validated optimizer configuration.
//! - [`DesignOutcome`]: normalized result of one design run.
//!
//! Convention: the objective `J` is minimized directly; no sign flips happen
//! anywhere in this layer.
use crate::optimization::{
    design::{
        types::{
            DEFAULT_DESIGN_MAX_ITER, DEFAULT_LBFGS_MEM, DEFAULT_SIMPLEX_STEP, DesignVector,
            FnEvalMap, Grad,
        },
        validation::{validate_value, verify_tol_cost, verify_tol_grad},
    },
    errors::{OptError, OptResult},
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// Choice of line search used inside the L-BFGS solver.
///
/// Parsing accepts case-insensitive `"MoreThuente"` / `"HagerZhang"`.
/// Unknown names return `OptError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Outer search algorithm.
///
/// - `Lbfgs`: quasi-Newton with finite-difference gradients of `J`.
/// - `NelderMead`: simplex search; needs no gradients and tolerates the
///   small discontinuities an iterative equilibrium solve leaves in `J`.
///
/// Parsing accepts case-insensitive `"lbfgs"`, `"l-bfgs"`, `"neldermead"`
/// and `"nelder-mead"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMethod {
    Lbfgs,
    NelderMead,
}

impl FromStr for SearchMethod {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lbfgs" | "l-bfgs" => Ok(SearchMethod::Lbfgs),
            "neldermead" | "nelder-mead" => Ok(SearchMethod::NelderMead),
            _ => Err(OptError::InvalidSearchMethod {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'LBFGS' or 'NelderMead'.",
            }),
        }
    }
}

/// Numerical tolerances and iteration limits used by the optimizer.
///
/// - `tol_grad`: terminate when the gradient norm falls below this threshold
///   (L-BFGS only).
/// - `tol_cost`: terminate when the change in cost falls below this
///   threshold (L-BFGS), or when the simplex cost spread does (Nelder–Mead).
/// - `max_iter`: hard cap on the number of iterations.
///
/// Any field can be `None` but **at least one** must be provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if all three are `None`.
    /// - [`OptError::InvalidTolGrad`] / [`OptError::InvalidTolCost`] for
    ///   non-finite or non-positive tolerances.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> OptResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        verify_tol_grad(tol_grad)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { tol_grad: Some(1e-6), tol_cost: None, max_iter: Some(DEFAULT_DESIGN_MAX_ITER) }
    }
}

/// Optimizer-level configuration.
///
/// Default:
/// - `tols`: `tol_grad = 1e-6`, `tol_cost = None`, `max_iter = 50`
/// - `method`: `Lbfgs`
/// - `line_searcher`: `MoreThuente`
/// - `verbose`: `false`
/// - `lbfgs_mem`: `None` (uses default of 7)
/// - `simplex_step`: `0.5`
#[derive(Debug, Clone, PartialEq)]
pub struct DesignOptions {
    pub tols: Tolerances,
    pub method: SearchMethod,
    pub line_searcher: LineSearcher,
    pub verbose: bool,
    pub lbfgs_mem: Option<usize>,
    /// Edge length of the initial Nelder–Mead simplex, in unconstrained
    /// coordinates.
    pub simplex_step: f64,
}

impl DesignOptions {
    /// Create a validated set of design options.
    ///
    /// # Errors
    /// - [`OptError::InvalidLBFGSMem`] if `lbfgs_mem == Some(0)`.
    /// - [`OptError::InvalidSimplexStep`] unless `simplex_step` is finite
    ///   and positive.
    pub fn new(
        tols: Tolerances, method: SearchMethod, line_searcher: LineSearcher, verbose: bool,
        lbfgs_mem: Option<usize>, simplex_step: f64,
    ) -> OptResult<Self> {
        if let Some(m) = lbfgs_mem {
            if m == 0 {
                return Err(OptError::InvalidLBFGSMem {
                    mem: m,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
        }
        if !simplex_step.is_finite() || simplex_step <= 0.0 {
            return Err(OptError::InvalidSimplexStep {
                value: simplex_step,
                reason: "Simplex step must be finite and positive.",
            });
        }
        Ok(Self { tols, method, line_searcher, verbose, lbfgs_mem, simplex_step })
    }

    /// L-BFGS history size with the crate default applied.
    pub fn memory(&self) -> usize {
        self.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM)
    }
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::default(),
            method: SearchMethod::Lbfgs,
            line_searcher: LineSearcher::MoreThuente,
            verbose: false,
            lbfgs_mem: None,
            simplex_step: DEFAULT_SIMPLEX_STEP,
        }
    }
}

/// Canonical result of one design run.
///
/// - `x`: best design vector (multipliers of the baseline parameters).
/// - `value`: objective `J` at `x`.
/// - `success`: `true` only when the solver reports convergence (or a
///   target cost); hitting the iteration cap is *not* success.
/// - `status`: human-readable termination status.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
/// - `grad_norm`: norm of the last available gradient, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignOutcome {
    pub x: DesignVector,
    pub value: f64,
    pub success: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl DesignOutcome {
    /// Build a validated outcome from raw solver state.
    ///
    /// # Errors
    /// - [`OptError::NonFiniteCost`] if `value` is not finite.
    /// - [`OptError::InvalidDesignHat`] if `x` has non-finite entries.
    pub fn new(
        x: DesignVector, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> OptResult<Self> {
        for (index, &entry) in x.iter().enumerate() {
            if !entry.is_finite() {
                return Err(OptError::InvalidDesignHat {
                    index,
                    value: entry,
                    reason: "Optimal design entries must be finite.",
                });
            }
        }
        validate_value(value)?;
        let (success, status) = match &termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            TerminationStatus::Terminated(reason) => {
                let success = matches!(
                    reason,
                    TerminationReason::SolverConverged | TerminationReason::TargetCostReached
                );
                (success, format!("{termination:?}"))
            }
        };
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self { x, value, success, status, iterations, fn_evals, grad_norm })
    }
}

#[cfg(test)]
mod tests {
    // Scope
    // -----
    // - String parsing of LineSearcher / SearchMethod.
    // - Tolerances and DesignOptions validation.
    // - DesignOutcome success mapping.
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Names parse case-insensitively; unknown names are rejected.
    //
    // Given
    // -----
    // - "hagerzhang", "Nelder-Mead", "bfgs".
    //
    // Expect
    // ------
    // - HagerZhang, NelderMead, `InvalidSearchMethod`.
    fn names_parse_case_insensitively() {
        // Arrange / Act
        let ls: LineSearcher = "hagerzhang".parse().expect("valid line search");
        let method: SearchMethod = "Nelder-Mead".parse().expect("valid method");
        let bad = "bfgs".parse::<SearchMethod>();

        // Assert
        assert_eq!(ls, LineSearcher::HagerZhang);
        assert_eq!(method, SearchMethod::NelderMead);
        assert!(matches!(bad, Err(OptError::InvalidSearchMethod { .. })));
        assert!(matches!(
            "wolfe".parse::<LineSearcher>(),
            Err(OptError::InvalidLineSearch { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Tolerances require at least one criterion and a positive cap.
    //
    // Given
    // -----
    // - (None, None, None) and (None, None, Some(0)).
    //
    // Expect
    // ------
    // - `NoTolerancesProvided` and `InvalidMaxIter`.
    fn tolerances_require_a_criterion() {
        // Act / Assert
        assert_eq!(Tolerances::new(None, None, None), Err(OptError::NoTolerancesProvided));
        assert!(matches!(
            Tolerances::new(None, None, Some(0)),
            Err(OptError::InvalidMaxIter { max_iter: 0, .. })
        ));
        assert_eq!(Tolerances::default().max_iter, Some(50));
    }

    #[test]
    // Purpose
    // -------
    // DesignOptions rejects zero memory and non-positive simplex steps.
    //
    // Given
    // -----
    // - lbfgs_mem = Some(0); simplex_step = 0.
    //
    // Expect
    // ------
    // - `InvalidLBFGSMem`, `InvalidSimplexStep`; defaults give memory 7.
    fn design_options_are_validated() {
        // Arrange
        let tols = Tolerances::default();

        // Act
        let zero_mem = DesignOptions::new(
            tols,
            SearchMethod::Lbfgs,
            LineSearcher::MoreThuente,
            false,
            Some(0),
            0.5,
        );
        let zero_step = DesignOptions::new(
            tols,
            SearchMethod::NelderMead,
            LineSearcher::MoreThuente,
            false,
            None,
            0.0,
        );

        // Assert
        assert!(matches!(zero_mem, Err(OptError::InvalidLBFGSMem { mem: 0, .. })));
        assert!(matches!(zero_step, Err(OptError::InvalidSimplexStep { .. })));
        assert_eq!(DesignOptions::default().memory(), DEFAULT_LBFGS_MEM);
    }

    #[test]
    // Purpose
    // -------
    // Only solver convergence counts as success; the iteration cap does not.
    //
    // Given
    // -----
    // - The same point terminated by `SolverConverged` and by `MaxItersReached`.
    //
    // Expect
    // ------
    // - success = true, then false; both keep the value.
    fn outcome_success_excludes_iteration_cap() {
        // Arrange
        let x = array![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];

        // Act
        let converged = DesignOutcome::new(
            x.clone(),
            0.9,
            TerminationStatus::Terminated(TerminationReason::SolverConverged),
            12,
            FnEvalMap::new(),
            None,
        )
        .expect("valid outcome");
        let capped = DesignOutcome::new(
            x,
            0.9,
            TerminationStatus::Terminated(TerminationReason::MaxItersReached),
            50,
            FnEvalMap::new(),
            Some(array![3.0, 4.0]),
        )
        .expect("valid outcome");

        // Assert
        assert!(converged.success);
        assert!(!capped.success);
        assert_eq!(capped.iterations, 50);
        assert_eq!(capped.grad_norm, Some(5.0));
    }

    #[test]
    // Purpose
    // -------
    // Non-finite values are rejected when building an outcome.
    //
    // Given
    // -----
    // - value = NaN.
    //
    // Expect
    // ------
    // - `NonFiniteCost`.
    fn outcome_rejects_non_finite_value() {
        // Act
        let result = DesignOutcome::new(
            array![1.0],
            f64::NAN,
            TerminationStatus::NotTerminated,
            0,
            FnEvalMap::new(),
            None,
        );

        // Assert
        assert!(matches!(result, Err(OptError::NonFiniteCost { .. })));
    }
}
