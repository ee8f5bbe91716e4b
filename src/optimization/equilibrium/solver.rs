//! Constant-lift equilibrium solver.
//!
//! For a fixed geometry, find the angle of attack at which the aerodynamic
//! adapter reports the requested lift coefficient. The search minimizes the
//! squared lift error: a downhill bracket from the configured start points,
//! then Brent's method (`argmin`'s [`BrentOpt`]) inside the bracket, then one
//! final adapter call at the returned angle.
use crate::{
    aero::{
        atmosphere::Atmosphere,
        operation::{FreeStream, OperationPoint},
        solver::AeroSolver,
    },
    geometry::wing::FlyingWing,
    optimization::{
        equilibrium::{
            NO_EQUILIBRIUM, adapter::LiftResidual, bracket::bracket_minimum,
            options::EquilibriumOptions, result::AerodynamicResult,
        },
        errors::{OptError, OptResult},
    },
};
use argmin::{
    core::{Executor, State, TerminationReason, TerminationStatus},
    solver::brent::BrentOpt,
};

/// Solves for the angle of attack that meets a lift coefficient at one
/// operating point. The free stream is resolved once at construction.
pub struct EquilibriumSolver<'a, A: AeroSolver + ?Sized> {
    aero: &'a A,
    free_stream: FreeStream,
    options: EquilibriumOptions,
}

impl<'a, A: AeroSolver + ?Sized> EquilibriumSolver<'a, A> {
    /// Resolve the operating point against `atmosphere` and build the solver.
    ///
    /// # Errors
    /// Atmosphere failures (e.g. altitude out of range) as `OptError::Aero`.
    pub fn new<M: Atmosphere + ?Sized>(
        aero: &'a A, atmosphere: &M, operation_point: &OperationPoint,
        options: EquilibriumOptions,
    ) -> OptResult<Self> {
        let free_stream = operation_point.free_stream(atmosphere)?;
        Ok(Self::from_free_stream(aero, free_stream, options))
    }

    pub fn from_free_stream(aero: &'a A, free_stream: FreeStream, options: EquilibriumOptions) -> Self {
        Self { aero, free_stream, options }
    }

    pub fn free_stream(&self) -> &FreeStream {
        &self.free_stream
    }

    pub fn options(&self) -> &EquilibriumOptions {
        &self.options
    }

    /// One adapter evaluation at `alpha` (deg). No retries; adapter errors
    /// are returned as `OptError::Aero` with their payload unchanged.
    pub fn solve_for_angle_of_attack(
        &self, wing: &FlyingWing, alpha: f64,
    ) -> OptResult<AerodynamicResult> {
        let condition = self.free_stream.at_alpha(alpha)?;
        let coefficients = self.aero.evaluate(wing, &condition)?;
        coefficients.validate()?;
        Ok(AerodynamicResult {
            cl: coefficients.cl,
            cdi: coefficients.cdi,
            cy: coefficients.cy,
            cm: coefficients.cm,
            alpha,
        })
    }

    /// Angle of attack minimizing `(CL(α) − target_cl)²`, re-solved there.
    ///
    /// # Errors
    /// - [`OptError::InvalidTargetCl`] for a non-finite target.
    /// - [`OptError::Convergence`] when bracketing exceeds its cap, Brent's
    ///   method stops for any reason other than convergence, or the optional
    ///   `cl_tolerance` is violated.
    /// - Adapter errors from any evaluation, unchanged.
    pub fn solve_for_lift_coefficient(
        &self, wing: &FlyingWing, target_cl: f64,
    ) -> OptResult<AerodynamicResult> {
        if !target_cl.is_finite() {
            return Err(OptError::InvalidTargetCl { value: target_cl });
        }
        let problem = LiftResidual::new(self, wing, target_cl);
        let (xa, xb) = self.options.bracket;
        let bracket = bracket_minimum(
            |alpha| problem.residual(alpha),
            xa,
            xb,
            self.options.grow_limit,
            self.options.max_iter,
        )?;
        let (lower, upper) = bracket.interval();

        let brent = BrentOpt::new(lower, upper).set_tolerance(f64::EPSILON.sqrt(), self.options.tol_alpha);
        let max_iter = self.options.max_iter;
        let mut state = Executor::new(problem, brent)
            .configure(|state| state.max_iters(max_iter))
            .run()?
            .state()
            .clone();
        let converged = matches!(
            state.get_termination_status(),
            TerminationStatus::Terminated(TerminationReason::SolverConverged)
        );
        let alpha = match state.take_best_param() {
            Some(alpha) if converged && alpha.is_finite() => alpha,
            _ => return Err(OptError::Convergence { reason: NO_EQUILIBRIUM.to_string() }),
        };

        let result = self.solve_for_angle_of_attack(wing, alpha)?;
        if let Some(tol) = self.options.cl_tolerance {
            if (result.cl - target_cl).abs() > tol {
                return Err(OptError::Convergence { reason: NO_EQUILIBRIUM.to_string() });
            }
        }
        Ok(result)
    }
}
