//! High-level entry point for the bounded design search.
//!
//! Picks the solver from [`DesignOptions`], wraps the optimizer in a
//! [`BoundedObjective`], and delegates to the matching runner.
use crate::{
    aero::solver::AeroSolver,
    geometry::winglet::NUM_WINGLET_KEYS,
    optimization::{
        design::{
            adapter::BoundedObjective,
            builders::{build_lbfgs_hager_zhang, build_lbfgs_more_thuente, build_nelder_mead},
            optimizer::WingletOptimizer,
            options::{DesignOptions, DesignOutcome, LineSearcher, SearchMethod},
            parametrization::DesignBounds,
            run::{run_lbfgs, run_nelder_mead},
        },
        equilibrium::Targets,
        errors::OptResult,
    },
};
use ndarray::Array1;

/// Minimize `J` over the multiplier box, starting from the baseline design.
///
/// # Behavior
/// - Start point: the all-ones vector clamped into `bounds`, mapped to
///   unconstrained coordinates.
/// - `SearchMethod::Lbfgs` uses the configured line search with
///   finite-difference gradients; `SearchMethod::NelderMead` builds a simplex
///   around the start point.
///
/// # Errors
/// - Builder errors (invalid tolerances rejected by `argmin`).
/// - Any error raised while evaluating `J`; the run is aborted.
pub fn minimize_design<A: AeroSolver + ?Sized>(
    optimizer: &WingletOptimizer<'_, A>, baseline: Targets, bounds: &DesignBounds,
    opts: &DesignOptions,
) -> OptResult<DesignOutcome> {
    let x0 = bounds.clamp(&Array1::ones(NUM_WINGLET_KEYS));
    let z0 = bounds.to_unconstrained(&x0);
    let problem = BoundedObjective::new(optimizer, baseline, *bounds);
    match opts.method {
        SearchMethod::Lbfgs => match opts.line_searcher {
            LineSearcher::MoreThuente => {
                let solver = build_lbfgs_more_thuente(opts)?;
                run_lbfgs(z0, opts, problem, solver)
            }
            LineSearcher::HagerZhang => {
                let solver = build_lbfgs_hager_zhang(opts)?;
                run_lbfgs(z0, opts, problem, solver)
            }
        },
        SearchMethod::NelderMead => {
            let solver = build_nelder_mead(&z0, opts)?;
            run_nelder_mead(opts, problem, solver)
        }
    }
}
