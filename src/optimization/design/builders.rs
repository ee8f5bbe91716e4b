//! design::builders — solver construction helpers.
//!
//! Purpose
//! -------
//! Build the outer `argmin` solvers from [`DesignOptions`], hiding generic
//! wiring so the runner only sees configured solvers.
//!
//! Key behaviors
//! -------------
//! - L-BFGS with More–Thuente or Hager–Zhang line search; optional gradient
//!   and cost-change tolerances applied by [`configure_lbfgs`].
//! - Nelder–Mead with an axis-aligned initial simplex around the start point
//!   and `tol_cost` as the simplex standard-deviation tolerance.
//!
//! Conventions
//! -----------
//! - Builders do **not** set the initial parameter of the L-BFGS state or
//!   `max_iters`; the runner applies both.
//! - Errors from `argmin` setters surface as [`OptError`](crate::optimization::errors::OptError)
//!   via `From<argmin::core::Error>`.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    design::{
        options::DesignOptions,
        types::{
            Cost, DesignNelderMead, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
    errors::OptResult,
};

/// L-BFGS with Hager–Zhang line search and the configured tolerances.
pub fn build_lbfgs_hager_zhang(opts: &DesignOptions) -> OptResult<LbfgsHagerZhang> {
    let lbfgs = LbfgsHagerZhang::new(HagerZhangLS::new(), opts.memory());
    configure_lbfgs(lbfgs, opts)
}

/// L-BFGS with More–Thuente line search and the configured tolerances.
pub fn build_lbfgs_more_thuente(opts: &DesignOptions) -> OptResult<LbfgsMoreThuente> {
    let lbfgs = LbfgsMoreThuente::new(MoreThuenteLS::new(), opts.memory());
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional gradient and cost-change tolerances to an L-BFGS solver.
///
/// When a tolerance is `None` the corresponding setter is skipped and
/// `argmin`'s default stays in effect.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &DesignOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}

/// Nelder–Mead whose initial simplex is `z0` plus `simplex_step` along each
/// coordinate axis.
pub fn build_nelder_mead(z0: &Theta, opts: &DesignOptions) -> OptResult<DesignNelderMead> {
    let mut simplex = Vec::with_capacity(z0.len() + 1);
    simplex.push(z0.clone());
    for i in 0..z0.len() {
        let mut vertex = z0.clone();
        vertex[i] += opts.simplex_step;
        simplex.push(vertex);
    }
    let mut solver = DesignNelderMead::new(simplex);
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_sd_tolerance(c)?;
    }
    Ok(solver)
}

#[cfg(test)]
mod tests {
    // Scope
    // -----
    // - Construction of each solver flavor from valid options.
    // - Tolerance wiring, including absent tolerances.
    use super::*;
    use crate::optimization::design::options::{LineSearcher, SearchMethod, Tolerances};
    use ndarray::Array1;

    fn options(tols: Tolerances, method: SearchMethod, mem: Option<usize>) -> DesignOptions {
        DesignOptions::new(tols, method, LineSearcher::MoreThuente, false, mem, 0.5)
            .expect("DesignOptions should be valid")
    }

    #[test]
    // Purpose
    // -------
    // Both L-BFGS flavors build with default and explicit memory.
    //
    // Given
    // -----
    // - Valid tolerances; lbfgs_mem None and Some(11).
    //
    // Expect
    // ------
    // - Every builder returns Ok.
    fn lbfgs_builders_accept_valid_options() {
        // Arrange
        let tols =
            Tolerances::new(Some(1e-6), Some(1e-8), Some(50)).expect("Tolerances should be valid");
        let default_mem = options(tols, SearchMethod::Lbfgs, None);
        let explicit_mem = options(tols, SearchMethod::Lbfgs, Some(11));

        // Act / Assert
        assert!(build_lbfgs_hager_zhang(&default_mem).is_ok());
        assert!(build_lbfgs_more_thuente(&default_mem).is_ok());
        assert!(build_lbfgs_hager_zhang(&explicit_mem).is_ok());
        assert!(build_lbfgs_more_thuente(&explicit_mem).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // `configure_lbfgs` leaves the solver constructible when no tolerances
    // are given.
    //
    // Given
    // -----
    // - Tolerances with only max_iter.
    //
    // Expect
    // ------
    // - Ok.
    fn configure_lbfgs_respects_absent_tolerances() {
        // Arrange
        let raw = LBFGS::new(MoreThuenteLS::new(), 7);
        let tols = Tolerances::new(None, None, Some(50)).expect("Tolerances should be valid");

        // Act
        let configured = configure_lbfgs(raw, &options(tols, SearchMethod::Lbfgs, None));

        // Assert
        assert!(configured.is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Nelder–Mead builds from a seven-dimensional start with and without a
    // cost tolerance.
    //
    // Given
    // -----
    // - z0 = zeros(7); tol_cost Some(1e-8) and None.
    //
    // Expect
    // ------
    // - Both builders return Ok.
    fn nelder_mead_builds_around_start_point() {
        // Arrange
        let z0 = Array1::zeros(7);
        let with_tol = Tolerances::new(None, Some(1e-8), Some(100)).expect("valid");
        let without_tol = Tolerances::new(None, None, Some(100)).expect("valid");

        // Act / Assert
        assert!(build_nelder_mead(&z0, &options(with_tol, SearchMethod::NelderMead, None)).is_ok());
        assert!(
            build_nelder_mead(&z0, &options(without_tol, SearchMethod::NelderMead, None)).is_ok()
        );
    }
}
