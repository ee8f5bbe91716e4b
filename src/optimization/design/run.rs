//! Execution helpers that run an `argmin` solver on the bounded design
//! objective and return a [`DesignOutcome`] in multiplier space.
use crate::{
    aero::solver::AeroSolver,
    optimization::{
        design::{
            adapter::BoundedObjective,
            options::{DesignOptions, DesignOutcome},
            types::{Grad, Theta},
            validation::validate_design_hat,
        },
        errors::OptResult,
    },
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, IterState, Solver, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Run a gradient-based solver (L-BFGS) on the design problem.
///
/// Wires the initial point `z0`, the optional slog observer (feature
/// `obs_slog`, `opts.verbose`) and the iteration cap, executes, and maps the
/// best `z` back through the problem's box transform.
///
/// # Errors
/// - Any error raised inside a cost or gradient evaluation (geometry,
///   equilibrium, adapter), recovered through `From<argmin::core::Error>`.
/// - Outcome validation errors.
pub fn run_lbfgs<'p, 'a, A, S>(
    z0: Theta, opts: &DesignOptions, problem: BoundedObjective<'p, 'a, A>, solver: S,
) -> OptResult<DesignOutcome>
where
    A: AeroSolver + ?Sized,
    S: Solver<BoundedObjective<'p, 'a, A>, IterState<Theta, Grad, (), (), (), f64>>,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&z0, &problem)?;
    }
    let bounds = *problem.bounds();
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(z0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let grad = result.take_gradient();
    let z_hat = validate_design_hat(result.take_best_param())?;
    DesignOutcome::new(
        bounds.to_bounded(&z_hat),
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        grad,
    )
}

/// Run a derivative-free solver (Nelder–Mead) on the design problem.
///
/// The simplex carries the start point, so only observers and the
/// iteration cap are configured here.
///
/// # Errors
/// As [`run_lbfgs`].
pub fn run_nelder_mead<'p, 'a, A, S>(
    opts: &DesignOptions, problem: BoundedObjective<'p, 'a, A>, solver: S,
) -> OptResult<DesignOutcome>
where
    A: AeroSolver + ?Sized,
    S: Solver<BoundedObjective<'p, 'a, A>, IterState<Theta, (), (), (), (), f64>>,
{
    let bounds = *problem.bounds();
    let mut optimizer = Executor::new(problem, solver);
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let z_hat = validate_design_hat(result.take_best_param())?;
    DesignOutcome::new(
        bounds.to_bounded(&z_hat),
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        None,
    )
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<A>(z0: &Theta, problem: &BoundedObjective<'_, '_, A>) -> OptResult<()>
where
    A: AeroSolver + ?Sized,
{
    let j0 = problem.cost(z0)?;
    let g0n = problem.gradient(z0).ok().map(|g| g.l2_norm());

    eprintln!(
        "init: J(x0) = {:.6}{}",
        j0,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    Ok(())
}
