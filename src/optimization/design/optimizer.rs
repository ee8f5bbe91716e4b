//! design::optimizer — the winglet design optimizer and its state machine.
//!
//! Purpose
//! -------
//! Own the two geometries of a study (a clean base wing and a target wing
//! carrying the winglet being designed), the equilibrium solver for one
//! operating point, and the optimization state. Every design evaluation
//! rebuilds the target's winglet, trims it to the target lift coefficient,
//! and scores it against the base wing.
//!
//! Key behaviors
//! -------------
//! - [`WingletOptimizer::put_up`]: trim the base wing and store its
//!   `{CDi, Cm}` as the normalization baseline.
//! - [`WingletOptimizer::set_bounds`]: convert physical limits into
//!   multiplier bounds (optional step; defaults apply otherwise).
//! - [`WingletOptimizer::objective`]: `J = k·CDi/CDi₀ + (1−k)·Cm/Cm₀` at a
//!   design vector, with the baseline passed explicitly.
//! - [`WingletOptimizer::optimize`]: bounded local search from the baseline
//!   design; non-convergence is a flag on the outcome, not an error.
//! - [`WingletOptimizer::evaluate_optimum`] and [`WingletOptimizer::record`]:
//!   re-solve and package the stored optimum.
//!
//! Invariants & assumptions
//! ------------------------
//! - The base wing is never mutated. The target's winglet is replaced by a
//!   freshly built surface on each evaluation; the baseline winglet
//!   parameters captured at construction are never changed.
//! - State transitions are `unset → set`; re-running a producing operation
//!   overwrites its slot. Operations called before their prerequisite fail
//!   with [`OptError::State`].
//! - Errors from geometry, equilibrium or the adapter abort whatever
//!   operation raised them; nothing is retried.
//!
//! Conventions
//! -----------
//! - The target wing lives in a `RefCell` so the `argmin` cost function,
//!   which only gets `&self`, can rebuild it. The optimizer is therefore
//!   not `Sync`; parallel studies use one optimizer per thread.
//!
//! Testing notes
//! -------------
//! - Unit tests use stub adapters with closed-form coefficients so objective
//!   values and optima are known exactly.
use std::cell::{Ref, RefCell};

use crate::{
    aero::{atmosphere::Atmosphere, operation::OperationPoint, solver::AeroSolver},
    geometry::{wing::FlyingWing, winglet::WingletParameters},
    optimization::{
        design::{
            api::minimize_design,
            artifact::OptimizationRecord,
            options::{DesignOptions, DesignOutcome},
            parametrization::{
                DesignBounds, PhysicalBounds, bounds_to_multiplier_space, vector_to_parameters,
            },
            types::DesignVector,
        },
        equilibrium::{AerodynamicResult, EquilibriumOptions, EquilibriumSolver, Targets},
        errors::{OptError, OptResult},
    },
};

/// Values produced by one evaluation of the objective.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveEvaluation {
    /// Scalarized objective `J`.
    pub value: f64,
    /// Raw `{CDi, Cm}` of the trimmed target wing.
    pub targets: Targets,
    /// Physical winglet parameters evaluated.
    pub parameters: WingletParameters,
}

/// Trimmed aerodynamic state of the target wing at one design vector.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignState {
    pub aerodynamics: AerodynamicResult,
    pub parameters: WingletParameters,
}

impl DesignState {
    pub fn targets(&self) -> Targets {
        self.aerodynamics.targets()
    }
}

/// Slots filled as the optimizer advances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimizationState {
    pub baseline: Option<Targets>,
    pub bounds: Option<DesignBounds>,
    pub optimum: Option<DesignOutcome>,
}

pub struct WingletOptimizer<'a, A: AeroSolver + ?Sized> {
    equilibrium: EquilibriumSolver<'a, A>,
    base: FlyingWing,
    target: RefCell<FlyingWing>,
    operation_point: OperationPoint,
    initial_winglet: WingletParameters,
    interpolation_factor: f64,
    state: OptimizationState,
}

impl<'a, A: AeroSolver + ?Sized> WingletOptimizer<'a, A> {
    /// Build an optimizer for one operating point and interpolation factor.
    ///
    /// The target's current winglet parameters become the baseline that
    /// design vectors multiply.
    ///
    /// # Errors
    /// - [`OptError::InvalidConfiguration`] if the target has no built
    ///   winglet, or `interpolation_factor` is not in `[0, 1]`.
    /// - Atmosphere errors while resolving the operating point.
    pub fn new<M: Atmosphere + ?Sized>(
        aero: &'a A, atmosphere: &M, base: FlyingWing, target: FlyingWing,
        operation_point: OperationPoint, interpolation_factor: f64,
        equilibrium_options: EquilibriumOptions,
    ) -> OptResult<Self> {
        let initial_winglet = match target.winglet_parameters() {
            Some(parameters) if target.has_winglet() => parameters.clone(),
            _ => {
                return Err(OptError::InvalidConfiguration {
                    reason: "Target wing must carry a winglet.",
                });
            }
        };
        if !(0.0..=1.0).contains(&interpolation_factor) {
            return Err(OptError::InvalidConfiguration {
                reason: "Interpolation factor must lie in [0, 1].",
            });
        }
        let equilibrium =
            EquilibriumSolver::new(aero, atmosphere, &operation_point, equilibrium_options)?;
        Ok(Self {
            equilibrium,
            base,
            target: RefCell::new(target),
            operation_point,
            initial_winglet,
            interpolation_factor,
            state: OptimizationState::default(),
        })
    }

    // ---- Accessors ----

    pub fn base(&self) -> &FlyingWing {
        &self.base
    }

    /// Borrow the target wing as left by the most recent evaluation.
    pub fn target(&self) -> Ref<'_, FlyingWing> {
        self.target.borrow()
    }

    pub fn operation_point(&self) -> &OperationPoint {
        &self.operation_point
    }

    pub fn initial_winglet(&self) -> &WingletParameters {
        &self.initial_winglet
    }

    pub fn interpolation_factor(&self) -> f64 {
        self.interpolation_factor
    }

    pub fn equilibrium(&self) -> &EquilibriumSolver<'a, A> {
        &self.equilibrium
    }

    pub fn state(&self) -> &OptimizationState {
        &self.state
    }

    pub fn baseline(&self) -> Option<Targets> {
        self.state.baseline
    }

    pub fn bounds(&self) -> Option<&DesignBounds> {
        self.state.bounds.as_ref()
    }

    pub fn optimum(&self) -> Option<&DesignOutcome> {
        self.state.optimum.as_ref()
    }

    // ---- Workflow ----

    /// Trim the base wing at the target lift coefficient and store its
    /// `{CDi, Cm}` as the baseline.
    ///
    /// # Errors
    /// - Equilibrium and adapter errors.
    /// - [`OptError::DegenerateBaseline`] if either component is zero or
    ///   non-finite.
    pub fn put_up(&mut self) -> OptResult<Targets> {
        let result = self
            .equilibrium
            .solve_for_lift_coefficient(&self.base, self.operation_point.target_cl())?;
        let targets = result.targets();
        for (name, value) in [("cdi", targets.cdi), ("cm", targets.cm)] {
            if value == 0.0 || !value.is_finite() {
                return Err(OptError::DegenerateBaseline { name, value });
            }
        }
        self.state.baseline = Some(targets);
        Ok(targets)
    }

    /// Convert and store physical design limits.
    ///
    /// # Errors
    /// See [`bounds_to_multiplier_space`].
    pub fn set_bounds(
        &mut self, lower: &PhysicalBounds, upper: &PhysicalBounds,
    ) -> OptResult<DesignBounds> {
        let bounds = bounds_to_multiplier_space(lower, upper, &self.initial_winglet)?;
        self.state.bounds = Some(bounds);
        Ok(bounds)
    }

    /// Rebuild the target winglet at `x` and trim it to the target CL.
    ///
    /// # Errors
    /// Design-vector, geometry, equilibrium and adapter errors.
    pub fn compute_state(&self, x: &DesignVector) -> OptResult<DesignState> {
        let parameters = vector_to_parameters(x, &self.initial_winglet)?;
        self.target.borrow_mut().rebuild_winglet(parameters.clone())?;
        let target = self.target.borrow();
        let aerodynamics =
            self.equilibrium.solve_for_lift_coefficient(&target, self.operation_point.target_cl())?;
        Ok(DesignState { aerodynamics, parameters })
    }

    /// Scalarized objective at `x` against an explicit `baseline`.
    ///
    /// `J = k·(CDi/CDi₀) + (1 − k)·(Cm/Cm₀)`.
    ///
    /// # Errors
    /// As [`WingletOptimizer::compute_state`].
    pub fn objective(&self, x: &DesignVector, baseline: &Targets) -> OptResult<ObjectiveEvaluation> {
        let DesignState { aerodynamics, parameters } = self.compute_state(x)?;
        let k = self.interpolation_factor;
        let cd = aerodynamics.cdi / baseline.cdi;
        let cm = aerodynamics.cm / baseline.cm;
        Ok(ObjectiveEvaluation {
            value: k * cd + (1.0 - k) * cm,
            targets: aerodynamics.targets(),
            parameters,
        })
    }

    /// Run the bounded design search and store the outcome.
    ///
    /// Uses the stored bounds or, if `set_bounds` was skipped, the default
    /// multiplier interval for every key.
    ///
    /// # Errors
    /// - [`OptError::State`] before [`WingletOptimizer::put_up`].
    /// - Any error raised while evaluating the objective; hitting the
    ///   iteration cap is **not** an error (see `DesignOutcome::success`).
    pub fn optimize(&mut self, options: &DesignOptions) -> OptResult<&DesignOutcome> {
        let baseline = self
            .state
            .baseline
            .ok_or(OptError::State { operation: "optimize", requires: "put_up" })?;
        let bounds = self.state.bounds.unwrap_or_default();
        let outcome = minimize_design(self, baseline, &bounds, options)?;
        Ok(&*self.state.optimum.insert(outcome))
    }

    /// Re-solve the target wing at the stored optimum. Idempotent.
    ///
    /// # Errors
    /// - [`OptError::State`] before [`WingletOptimizer::optimize`].
    /// - As [`WingletOptimizer::compute_state`].
    pub fn evaluate_optimum(&self) -> OptResult<DesignState> {
        let optimum = self
            .state
            .optimum
            .as_ref()
            .ok_or(OptError::State { operation: "evaluate_optimum", requires: "optimize" })?;
        self.compute_state(&optimum.x)
    }

    /// Package the run as a serializable record.
    ///
    /// # Errors
    /// - [`OptError::State`] before `put_up` or `optimize`.
    /// - As [`WingletOptimizer::evaluate_optimum`].
    pub fn record(&self) -> OptResult<OptimizationRecord> {
        let baseline = self
            .state
            .baseline
            .ok_or(OptError::State { operation: "record", requires: "put_up" })?;
        let optimum = self
            .state
            .optimum
            .as_ref()
            .ok_or(OptError::State { operation: "record", requires: "optimize" })?;
        let evaluated = self.evaluate_optimum()?;
        Ok(OptimizationRecord {
            interpolation_factor: self.interpolation_factor,
            design_vector: optimum.x.clone(),
            parameters: evaluated.parameters,
            bounds: self.state.bounds.unwrap_or_default(),
            baseline,
            optimum: evaluated.aerodynamics.targets(),
            aerodynamics: evaluated.aerodynamics,
            objective: optimum.value,
            success: optimum.success,
            status: optimum.status.clone(),
            iterations: optimum.iterations,
            fn_evals: optimum.fn_evals.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        })
    }
}
