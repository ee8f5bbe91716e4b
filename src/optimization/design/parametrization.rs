//! design::parametrization — design vectors, bounds and the box transform.
//!
//! Purpose
//! -------
//! Translate between the optimizer's dimensionless search space and physical
//! winglet parameters. The outer solver works on multipliers of a baseline
//! parameter set; this module owns that mapping, the per-key multiplier
//! bounds, and the logistic box transform that lets unconstrained `argmin`
//! solvers respect those bounds.
//!
//! Key behaviors
//! -------------
//! - [`vector_to_parameters`] / [`parameters_to_vector`]: multiplier vector
//!   ↔ physical [`WingletParameters`], airfoil carried through unchanged.
//! - [`bounds_to_multiplier_space`]: partial physical limits → full
//!   [`DesignBounds`] by dividing by the baseline.
//! - [`DesignBounds::to_bounded`] / [`DesignBounds::to_unconstrained`]:
//!   `x = lo + (hi − lo)·σ(z)` per component and its inverse.
//!
//! Invariants & assumptions
//! ------------------------
//! - Component `i` of every vector corresponds to `WingletKey::ALL[i]`.
//! - Every interval of a [`DesignBounds`] satisfies `lower ≤ upper` and is
//!   finite.
//! - A negative baseline flips the sign of the multiplier, so the converted
//!   pair is swapped to keep `lower ≤ upper`.
//! - A zero baseline cannot be scaled; explicit bounds on such a key are an
//!   error, and the inverse mapping sends it to multiplier 1.
//!
//! Conventions
//! -----------
//! - Keys with no explicit physical bound keep [`DEFAULT_MULTIPLIER_BOUNDS`].
//! - Degenerate intervals (`lower == upper`) pin the component: the box
//!   transform returns `lower` for any `z`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover conversion arithmetic, each bounds error, the sign
//!   swap, and transform consistency with `contains`/`clamp`.
use crate::{
    geometry::winglet::{NUM_WINGLET_KEYS, WingletKey, WingletParameters},
    optimization::{
        design::{
            types::{DesignVector, Theta},
            validation::validate_design_vector,
        },
        errors::{OptError, OptResult},
        numerical_stability::{from_interval, to_interval},
    },
};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiplier interval applied to keys without explicit physical bounds.
pub const DEFAULT_MULTIPLIER_BOUNDS: (f64, f64) = (0.01, 1.8);

/// Partial map of physical limits, one value per bounded key.
pub type PhysicalBounds = BTreeMap<WingletKey, f64>;

/// One `(lower, upper)` multiplier interval per [`WingletKey`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignBounds {
    intervals: [(f64, f64); NUM_WINGLET_KEYS],
}

impl Default for DesignBounds {
    fn default() -> Self {
        Self { intervals: [DEFAULT_MULTIPLIER_BOUNDS; NUM_WINGLET_KEYS] }
    }
}

impl DesignBounds {
    pub fn get(&self, key: WingletKey) -> (f64, f64) {
        self.intervals[key.index()]
    }

    pub fn lower(&self) -> DesignVector {
        self.intervals.iter().map(|&(lo, _)| lo).collect()
    }

    pub fn upper(&self) -> DesignVector {
        self.intervals.iter().map(|&(_, hi)| hi).collect()
    }

    /// Whether every component of `x` lies inside its interval.
    pub fn contains(&self, x: &DesignVector) -> bool {
        x.len() == NUM_WINGLET_KEYS
            && x.iter().zip(self.intervals.iter()).all(|(&v, &(lo, hi))| lo <= v && v <= hi)
    }

    /// Component-wise projection of `x` onto the box.
    pub fn clamp(&self, x: &DesignVector) -> DesignVector {
        x.iter().zip(self.intervals.iter()).map(|(&v, &(lo, hi))| v.clamp(lo, hi)).collect()
    }

    /// Map unconstrained coordinates into the box.
    pub fn to_bounded(&self, z: &Theta) -> DesignVector {
        z.iter().zip(self.intervals.iter()).map(|(&zi, &(lo, hi))| to_interval(zi, lo, hi)).collect()
    }

    /// Inverse of [`DesignBounds::to_bounded`]; points on the boundary map
    /// to large but finite coordinates.
    pub fn to_unconstrained(&self, x: &DesignVector) -> Theta {
        x.iter()
            .zip(self.intervals.iter())
            .map(|(&xi, &(lo, hi))| from_interval(xi, lo, hi))
            .collect()
    }
}

/// Scale the baseline by the multipliers in `x`.
///
/// # Errors
/// - [`OptError::DesignVectorLength`] if `x.len() != 7`.
/// - [`OptError::NonFiniteDesignVector`] for a NaN/±inf entry.
pub fn vector_to_parameters(
    x: &DesignVector, baseline: &WingletParameters,
) -> OptResult<WingletParameters> {
    validate_design_vector(x)?;
    let mut values = *baseline.values();
    for (value, &multiplier) in values.iter_mut().zip(x.iter()) {
        *value *= multiplier;
    }
    Ok(WingletParameters::from_values(values, baseline.airfoil()))
}

/// Express `parameters` as multipliers of `baseline`. Keys with a zero
/// baseline map to 1.
pub fn parameters_to_vector(
    parameters: &WingletParameters, baseline: &WingletParameters,
) -> DesignVector {
    let values: Vec<f64> = WingletKey::ALL
        .iter()
        .map(|&key| {
            let base = baseline.get(key);
            if base == 0.0 { 1.0 } else { parameters.get(key) / base }
        })
        .collect();
    Array1::from(values)
}

/// Convert physical limits into multiplier bounds.
///
/// `lower` and `upper` must name the same keys. For each named key the
/// physical limits are divided by the baseline value (and swapped if the
/// baseline is negative); all other keys keep [`DEFAULT_MULTIPLIER_BOUNDS`].
///
/// # Errors
/// - [`OptError::BoundsMismatch`] when the key sets differ.
/// - [`OptError::ZeroBaseline`] for a bounded key whose baseline is zero.
/// - [`OptError::InvalidBounds`] for non-finite limits or `lower > upper`
///   after conversion.
pub fn bounds_to_multiplier_space(
    lower: &PhysicalBounds, upper: &PhysicalBounds, baseline: &WingletParameters,
) -> OptResult<DesignBounds> {
    let missing_in_upper: Vec<WingletKey> =
        lower.keys().filter(|k| !upper.contains_key(k)).copied().collect();
    let missing_in_lower: Vec<WingletKey> =
        upper.keys().filter(|k| !lower.contains_key(k)).copied().collect();
    if !missing_in_lower.is_empty() || !missing_in_upper.is_empty() {
        return Err(OptError::BoundsMismatch { missing_in_lower, missing_in_upper });
    }

    let mut bounds = DesignBounds::default();
    for (&key, &lo_phys) in lower {
        let hi_phys = upper[&key];
        let base = baseline.get(key);
        if base == 0.0 {
            return Err(OptError::ZeroBaseline { key });
        }
        let (mut lo, mut hi) = (lo_phys / base, hi_phys / base);
        if base < 0.0 {
            std::mem::swap(&mut lo, &mut hi);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return Err(OptError::InvalidBounds {
                key,
                lower: lo,
                upper: hi,
                reason: "Bounds must be finite.",
            });
        }
        if lo > hi {
            return Err(OptError::InvalidBounds {
                key,
                lower: lo,
                upper: hi,
                reason: "Lower bound exceeds upper bound.",
            });
        }
        bounds.intervals[key.index()] = (lo, hi);
    }
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    // Scope
    // -----
    // - Vector ↔ parameter mapping.
    // - Physical → multiplier bounds and its error cases.
    // - Box transform against contains / clamp.
    use super::*;
    use crate::utils::{base_lower_bounds, base_upper_bounds, base_winglet_parameters};
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // The all-ones vector reproduces the baseline; other entries scale it.
    //
    // Given
    // -----
    // - Baseline winglet parameters; x = ones with x[CantAngle] = 0.5.
    //
    // Expect
    // ------
    // - cant halves, every other value and the airfoil unchanged.
    fn vector_scales_baseline_componentwise() {
        // Arrange
        let baseline = base_winglet_parameters(true);
        let mut x = Array1::ones(NUM_WINGLET_KEYS);
        x[WingletKey::CantAngle.index()] = 0.5;

        // Act
        let identity =
            vector_to_parameters(&Array1::ones(NUM_WINGLET_KEYS), &baseline).expect("valid x");
        let scaled = vector_to_parameters(&x, &baseline).expect("valid x");

        // Assert
        assert_eq!(identity, baseline);
        assert_relative_eq!(scaled[WingletKey::CantAngle], 22.5);
        assert_relative_eq!(scaled[WingletKey::SweepAngle], 38.0);
        assert_eq!(scaled.airfoil(), "naca0012");
        assert_relative_eq!(
            parameters_to_vector(&scaled, &baseline)[WingletKey::CantAngle.index()],
            0.5
        );
    }

    #[test]
    // Purpose
    // -------
    // Explicit physical limits are divided by the baseline; unlisted keys
    // keep the default interval.
    //
    // Given
    // -----
    // - cant baseline 45°, limits [15°, 80°]; taper baseline 0.32 in [0.3, 1.0].
    //
    // Expect
    // ------
    // - cant (1/3, 16/9); taper (0.9375, 3.125).
    fn physical_bounds_are_divided_by_baseline() {
        // Arrange
        let baseline = base_winglet_parameters(false);
        let lower = PhysicalBounds::from([(WingletKey::CantAngle, 15.0), (WingletKey::TaperRatio, 0.3)]);
        let upper = PhysicalBounds::from([(WingletKey::CantAngle, 80.0), (WingletKey::TaperRatio, 1.0)]);

        // Act
        let bounds = bounds_to_multiplier_space(&lower, &upper, &baseline).expect("valid bounds");

        // Assert
        let (lo, hi) = bounds.get(WingletKey::CantAngle);
        assert_relative_eq!(lo, 15.0 / 45.0);
        assert_relative_eq!(hi, 80.0 / 45.0);
        let (lo, hi) = bounds.get(WingletKey::TaperRatio);
        assert_relative_eq!(lo, 0.9375);
        assert_relative_eq!(hi, 3.125);
        assert_eq!(bounds.get(WingletKey::Span), DEFAULT_MULTIPLIER_BOUNDS);
    }

    #[test]
    // Purpose
    // -------
    // The full reference bound set converts without error.
    //
    // Given
    // -----
    // - Baseline with non-zero twists; all seven keys bounded.
    //
    // Expect
    // ------
    // - Ok; baseline (all ones) is inside the box.
    fn reference_bounds_contain_baseline() {
        // Arrange
        let baseline = base_winglet_parameters(false);

        // Act
        let bounds =
            bounds_to_multiplier_space(&base_lower_bounds(), &base_upper_bounds(), &baseline)
                .expect("valid bounds");

        // Assert
        assert!(bounds.contains(&Array1::ones(NUM_WINGLET_KEYS)));
        let (lo, hi) = bounds.get(WingletKey::Span);
        assert_relative_eq!(lo, 0.4);
        assert_relative_eq!(hi, 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Key sets of lower and upper must match.
    //
    // Given
    // -----
    // - lower names span and cant; upper names span and sweep.
    //
    // Expect
    // ------
    // - `BoundsMismatch` listing sweep missing in lower and cant in upper.
    fn mismatched_key_sets_are_rejected() {
        // Arrange
        let baseline = base_winglet_parameters(true);
        let lower = PhysicalBounds::from([(WingletKey::Span, 0.02), (WingletKey::CantAngle, 15.0)]);
        let upper = PhysicalBounds::from([(WingletKey::Span, 0.1), (WingletKey::SweepAngle, 50.0)]);

        // Act
        let result = bounds_to_multiplier_space(&lower, &upper, &baseline);

        // Assert
        assert_eq!(
            result,
            Err(OptError::BoundsMismatch {
                missing_in_lower: vec![WingletKey::SweepAngle],
                missing_in_upper: vec![WingletKey::CantAngle],
            })
        );
    }

    #[test]
    // Purpose
    // -------
    // Zero baselines cannot be bounded; negative baselines swap the pair;
    // inverted limits fail.
    //
    // Given
    // -----
    // - twistRoot baseline 0 with explicit bounds.
    // - sweep baseline −10 with limits [−20, −5].
    // - cant limits [80, 15].
    //
    // Expect
    // ------
    // - `ZeroBaseline`, (0.5, 2.0), `InvalidBounds`.
    fn zero_negative_and_inverted_bounds() {
        // Arrange
        let zero_twist = base_winglet_parameters(true);
        let negative_sweep = zero_twist.with_value(WingletKey::SweepAngle, -10.0);
        let twist_lo = PhysicalBounds::from([(WingletKey::TwistRoot, -5.0)]);
        let twist_hi = PhysicalBounds::from([(WingletKey::TwistRoot, 5.0)]);
        let sweep_lo = PhysicalBounds::from([(WingletKey::SweepAngle, -20.0)]);
        let sweep_hi = PhysicalBounds::from([(WingletKey::SweepAngle, -5.0)]);
        let cant_lo = PhysicalBounds::from([(WingletKey::CantAngle, 80.0)]);
        let cant_hi = PhysicalBounds::from([(WingletKey::CantAngle, 15.0)]);

        // Act
        let zero = bounds_to_multiplier_space(&twist_lo, &twist_hi, &zero_twist);
        let swapped = bounds_to_multiplier_space(&sweep_lo, &sweep_hi, &negative_sweep)
            .expect("negative baseline is allowed");
        let inverted = bounds_to_multiplier_space(&cant_lo, &cant_hi, &zero_twist);

        // Assert
        assert_eq!(zero, Err(OptError::ZeroBaseline { key: WingletKey::TwistRoot }));
        assert_eq!(swapped.get(WingletKey::SweepAngle), (0.5, 2.0));
        assert!(matches!(
            inverted,
            Err(OptError::InvalidBounds { key: WingletKey::CantAngle, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // The box transform lands inside the bounds and inverts on the interior.
    //
    // Given
    // -----
    // - Default bounds; z with large magnitude entries; x = clamp(ones).
    //
    // Expect
    // ------
    // - to_bounded(z) is contained; to_bounded(to_unconstrained(x)) ≈ x.
    fn box_transform_respects_bounds() {
        // Arrange
        let bounds = DesignBounds::default();
        let z = array![-50.0, -1.0, 0.0, 1.0, 50.0, 3.0, -3.0];
        let x = bounds.clamp(&Array1::ones(NUM_WINGLET_KEYS));

        // Act
        let bounded = bounds.to_bounded(&z);
        let round_trip = bounds.to_bounded(&bounds.to_unconstrained(&x));

        // Assert
        assert!(bounds.contains(&bounded));
        for (a, b) in round_trip.iter().zip(x.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-10);
        }
        assert!(!bounds.contains(&Array1::from_elem(NUM_WINGLET_KEYS, 2.0)));
    }
}
