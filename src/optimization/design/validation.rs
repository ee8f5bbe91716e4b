//! Validation helpers for the design optimizer.
//!
//! - **Tolerance checks**: [`verify_tol_grad`], [`verify_tol_cost`] ensure
//!   numeric tolerances are finite and strictly positive when provided.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Design vectors**: [`validate_design_vector`] checks length and
//!   finiteness of trial vectors; [`validate_design_hat`] unwraps the
//!   solver's best point.
//! - **Objective values**: [`validate_value`] checks finiteness.
use crate::{
    geometry::winglet::NUM_WINGLET_KEYS,
    optimization::{
        design::types::{DesignVector, Grad, Theta},
        errors::{OptError, OptResult},
    },
};

/// Validate the optional gradient‐norm tolerance.
///
/// # Errors
/// Returns [`OptError::InvalidTolGrad`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_grad(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate the optional cost‐change tolerance.
///
/// # Errors
/// Returns [`OptError::InvalidTolCost`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_cost(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidTolCost { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidTolCost { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] for the first non-finite element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Check a design vector has one finite entry per winglet key.
///
/// # Errors
/// - [`OptError::DesignVectorLength`] on a length mismatch.
/// - [`OptError::NonFiniteDesignVector`] for the first NaN/±inf entry.
pub fn validate_design_vector(x: &DesignVector) -> OptResult<()> {
    if x.len() != NUM_WINGLET_KEYS {
        return Err(OptError::DesignVectorLength { expected: NUM_WINGLET_KEYS, found: x.len() });
    }
    for (index, &value) in x.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::NonFiniteDesignVector { index, value });
        }
    }
    Ok(())
}

/// Validate and unwrap the solver's best point.
///
/// # Errors
/// - [`OptError::MissingDesignHat`] if no vector was provided.
/// - [`OptError::InvalidDesignHat`] if any element is non-finite.
pub fn validate_design_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    match theta_hat {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidDesignHat {
                        index,
                        value,
                        reason: "Optimal design entries must be finite.",
                    });
                }
            }
            Ok(t)
        }
        None => Err(OptError::MissingDesignHat),
    }
}

/// Validate that a scalar objective value is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array};

    #[test]
    // Purpose
    // -------
    // Design vectors must have seven finite entries.
    //
    // Given
    // -----
    // - A length-6 vector and a length-7 vector with NaN at index 3.
    //
    // Expect
    // ------
    // - `DesignVectorLength` and `NonFiniteDesignVector { index: 3 }`.
    fn design_vector_length_and_finiteness_are_checked() {
        // Arrange
        let short = Array1::<f64>::ones(6);
        let mut with_nan = Array1::<f64>::ones(7);
        with_nan[3] = f64::NAN;

        // Act
        let err_short = validate_design_vector(&short);
        let err_nan = validate_design_vector(&with_nan);

        // Assert
        assert_eq!(err_short, Err(OptError::DesignVectorLength { expected: 7, found: 6 }));
        assert!(matches!(err_nan, Err(OptError::NonFiniteDesignVector { index: 3, .. })));
        assert!(validate_design_vector(&Array1::ones(7)).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Tolerances must be finite and positive when given; `None` passes.
    //
    // Given
    // -----
    // - tol_grad = 0, tol_cost = inf, both None.
    //
    // Expect
    // ------
    // - `InvalidTolGrad`, `InvalidTolCost`, Ok.
    fn tolerances_are_checked() {
        // Arrange / Act
        let grad = verify_tol_grad(Some(0.0));
        let cost = verify_tol_cost(Some(f64::INFINITY));

        // Assert
        assert!(matches!(grad, Err(OptError::InvalidTolGrad { .. })));
        assert!(matches!(cost, Err(OptError::InvalidTolCost { .. })));
        assert!(verify_tol_grad(None).is_ok() && verify_tol_cost(None).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Gradients with wrong length or non-finite entries are rejected.
    //
    // Given
    // -----
    // - [1, 2] checked against dim 3; [1, inf] against dim 2.
    //
    // Expect
    // ------
    // - `GradientDimMismatch`, then `InvalidGradient { index: 1 }`.
    fn gradients_are_checked() {
        // Arrange
        let g = array![1.0, 2.0];
        let bad = array![1.0, f64::INFINITY];

        // Act / Assert
        assert_eq!(
            validate_grad(&g, 3),
            Err(OptError::GradientDimMismatch { expected: 3, found: 2 })
        );
        assert!(matches!(validate_grad(&bad, 2), Err(OptError::InvalidGradient { index: 1, .. })));
        assert_eq!(validate_design_hat(None), Err(OptError::MissingDesignHat));
    }
}
