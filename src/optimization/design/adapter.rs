//! Adapter that exposes the bounded design objective as an `argmin` problem.
//!
//! The solver searches unconstrained coordinates `z`; each evaluation maps
//! `z` into the multiplier box, rebuilds the target winglet, trims it to the
//! target lift coefficient and returns the scalarized objective `J`. The
//! gradient is always a finite-difference gradient of that cost.
use std::cell::RefCell;

use crate::{
    aero::solver::AeroSolver,
    optimization::{
        design::{
            optimizer::WingletOptimizer,
            parametrization::DesignBounds,
            types::{Cost, Grad, Theta},
            validation::validate_grad,
        },
        equilibrium::Targets,
        errors::OptError,
    },
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;

/// Bridges a [`WingletOptimizer`] to `argmin`'s `CostFunction` and
/// `Gradient` over box-transformed coordinates.
///
/// - `CostFunction::cost` returns `J(to_bounded(z))`.
/// - `Gradient::gradient` returns a finite-difference gradient of the cost,
///   central first with a forward-difference fallback.
pub struct BoundedObjective<'p, 'a, A: AeroSolver + ?Sized> {
    optimizer: &'p WingletOptimizer<'a, A>,
    baseline: Targets,
    bounds: DesignBounds,
}

impl<'p, 'a, A: AeroSolver + ?Sized> BoundedObjective<'p, 'a, A> {
    pub fn new(
        optimizer: &'p WingletOptimizer<'a, A>, baseline: Targets, bounds: DesignBounds,
    ) -> Self {
        Self { optimizer, baseline, bounds }
    }

    pub fn bounds(&self) -> &DesignBounds {
        &self.bounds
    }
}

impl<'p, 'a, A: AeroSolver + ?Sized> CostFunction for BoundedObjective<'p, 'a, A> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate `J` at the design point `to_bounded(z)`.
    ///
    /// # Errors
    /// Propagates geometry, equilibrium and adapter errors unchanged;
    /// returns `NonFiniteCost` if `J` is not finite.
    fn cost(&self, z: &Self::Param) -> Result<Self::Output, Error> {
        let x = self.bounds.to_bounded(z);
        let value = self.optimizer.objective(&x, &self.baseline)?.value;
        if !value.is_finite() {
            return Err((OptError::NonFiniteCost { value }).into());
        }
        Ok(value)
    }
}

impl<'p, 'a, A: AeroSolver + ?Sized> Gradient for BoundedObjective<'p, 'a, A> {
    type Param = Theta;
    type Gradient = Grad;

    /// Finite-difference gradient of the cost at `z`.
    ///
    /// - Try central differences first.
    /// - If any cost evaluation failed (captured in `closure_err`), retry
    ///   with forward differences.
    /// - If the central gradient fails validation, retry once with forward
    ///   differences and validate again.
    ///
    /// The FD closure must return `f64`, so the first error is stashed in
    /// `closure_err` and the closure returns `NaN`.
    ///
    /// # Errors
    /// The first error raised by a cost evaluation during the forward pass,
    /// or a validation error on the final gradient.
    fn gradient(&self, z: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = z.len();
        let closure_err: RefCell<Option<Error>> = RefCell::new(None);
        let cost_func = |z: &Theta| -> f64 {
            match self.cost(z) {
                Ok(val) => val,
                Err(e) => {
                    let mut slot = closure_err.borrow_mut();
                    if slot.is_none() {
                        *slot = Some(e);
                    }
                    f64::NAN
                }
            }
        };
        let fd_grad = z.central_diff(&cost_func);
        if closure_err.borrow().is_some() {
            return run_fd_diff(z, &cost_func, &closure_err);
        }
        match validate_grad(&fd_grad, dim) {
            Ok(()) => Ok(fd_grad),
            Err(_) => run_fd_diff(z, &cost_func, &closure_err),
        }
    }
}

/// Forward-difference gradient of `func` at `z`, with error capture.
///
/// Clears `closure_err`, runs `forward_diff`, returns any captured error,
/// then validates the gradient.
fn run_fd_diff<G: Fn(&Theta) -> f64>(
    z: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> Result<Grad, Error> {
    closure_err.replace(None);
    let fd_grad = z.forward_diff(func);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, z.len())?;
    Ok(fd_grad)
}
