//! Exposes the lift residual of one geometry as an `argmin` problem.
use crate::{
    aero::solver::AeroSolver,
    geometry::wing::FlyingWing,
    optimization::{equilibrium::solver::EquilibriumSolver, errors::OptResult},
};
use argmin::core::{CostFunction, Error};

/// Squared lift error `(CL(α) − CL*)²` for a fixed wing.
///
/// Each evaluation is one adapter call through
/// [`EquilibriumSolver::solve_for_angle_of_attack`]; adapter errors travel
/// through `argmin` and are recovered by `From<argmin::core::Error>`.
pub struct LiftResidual<'s, 'a, A: AeroSolver + ?Sized> {
    solver: &'s EquilibriumSolver<'a, A>,
    wing: &'s FlyingWing,
    target_cl: f64,
}

impl<'s, 'a, A: AeroSolver + ?Sized> LiftResidual<'s, 'a, A> {
    pub fn new(solver: &'s EquilibriumSolver<'a, A>, wing: &'s FlyingWing, target_cl: f64) -> Self {
        Self { solver, wing, target_cl }
    }

    pub fn residual(&self, alpha: f64) -> OptResult<f64> {
        let result = self.solver.solve_for_angle_of_attack(self.wing, alpha)?;
        let error = result.cl - self.target_cl;
        Ok(error * error)
    }
}

impl<'s, 'a, A: AeroSolver + ?Sized> CostFunction for LiftResidual<'s, 'a, A> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, alpha: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.residual(*alpha)?)
    }
}
