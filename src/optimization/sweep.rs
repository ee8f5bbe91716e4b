//! sweep — independent design runs over a range of interpolation factors.
//!
//! Purpose
//! -------
//! Explore the drag / pitching-moment trade-off by running one complete
//! design study (`put_up` → `set_bounds` → `optimize` → `record`) per
//! interpolation factor `k`.
//!
//! Key behaviors
//! -------------
//! - Each study gets its own [`WingletOptimizer`] built from clones of the
//!   base and target wings; nothing mutable is shared.
//! - With `parallel = true` and the `parallel` feature (on by default),
//!   studies are spread over the rayon thread pool; otherwise they run one
//!   after another on the caller's thread.
//! - A failing or panicking study yields an error entry; the others still
//!   complete. Output order equals input order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Adapters and atmosphere models are shared by reference across threads
//!   and must be `Sync`.
use std::panic::{AssertUnwindSafe, catch_unwind};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    aero::{atmosphere::Atmosphere, operation::OperationPoint, solver::AeroSolver},
    geometry::wing::FlyingWing,
    optimization::{
        design::{DesignOptions, OptimizationRecord, PhysicalBounds, WingletOptimizer},
        equilibrium::EquilibriumOptions,
        errors::{OptError, OptResult},
    },
};

/// Options shared by every study of a sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepConfig {
    /// Physical `(lower, upper)` limits; `None` keeps the default
    /// multiplier bounds.
    pub bounds: Option<(PhysicalBounds, PhysicalBounds)>,
    pub equilibrium: EquilibriumOptions,
    pub design: DesignOptions,
    pub parallel: bool,
}

/// Result of one study.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepEntry {
    pub interpolation_factor: f64,
    pub outcome: OptResult<OptimizationRecord>,
}

/// Run one design study per entry of `interpolation_factors`.
///
/// Studies run on the rayon pool when `config.parallel` is set and the
/// `parallel` feature is enabled; otherwise they run in order on the
/// caller's thread.
pub fn run_sweep<A, M>(
    aero: &A, atmosphere: &M, base: &FlyingWing, target: &FlyingWing,
    operation_point: &OperationPoint, interpolation_factors: &[f64], config: &SweepConfig,
) -> Vec<SweepEntry>
where
    A: AeroSolver + Sync + ?Sized,
    M: Atmosphere + Sync + ?Sized,
{
    let entry = |&k: &f64| SweepEntry {
        interpolation_factor: k,
        outcome: catch_unwind(AssertUnwindSafe(|| {
            run_study(aero, atmosphere, base, target, operation_point, k, config)
        }))
        .unwrap_or(Err(OptError::WorkerPanicked { interpolation_factor: k })),
    };

    collect_entries(interpolation_factors, config.parallel, entry)
}

#[cfg(feature = "parallel")]
fn collect_entries<F>(interpolation_factors: &[f64], parallel: bool, entry: F) -> Vec<SweepEntry>
where
    F: Fn(&f64) -> SweepEntry + Send + Sync,
{
    if parallel {
        interpolation_factors.par_iter().map(entry).collect()
    } else {
        interpolation_factors.iter().map(entry).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn collect_entries<F>(interpolation_factors: &[f64], _parallel: bool, entry: F) -> Vec<SweepEntry>
where
    F: Fn(&f64) -> SweepEntry,
{
    interpolation_factors.iter().map(entry).collect()
}

fn run_study<A, M>(
    aero: &A, atmosphere: &M, base: &FlyingWing, target: &FlyingWing,
    operation_point: &OperationPoint, interpolation_factor: f64, config: &SweepConfig,
) -> OptResult<OptimizationRecord>
where
    A: AeroSolver + ?Sized,
    M: Atmosphere + ?Sized,
{
    let mut optimizer = WingletOptimizer::new(
        aero,
        atmosphere,
        base.clone(),
        target.clone(),
        *operation_point,
        interpolation_factor,
        config.equilibrium,
    )?;
    optimizer.put_up()?;
    if let Some((lower, upper)) = &config.bounds {
        optimizer.set_bounds(lower, upper)?;
    }
    optimizer.optimize(&config.design)?;
    optimizer.record()
}
