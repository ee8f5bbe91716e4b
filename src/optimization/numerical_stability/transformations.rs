//! Numerical stability utilities.
//!
//! Provides guarded implementations of the logistic transform and its inverse
//! and the interval maps built on them. The design optimizer searches an
//! unconstrained space `z ∈ ℝⁿ` and maps every coordinate into its box with
//! `x = lo + (hi − lo)·σ(z)`; these helpers keep that map finite for any
//! `f64` input and invertible away from the box edges.
//!
//! # Provided items
//! - [`LOGIT_EPS`]: clamp margin applied before taking a logit.
//! - [`GENERAL_TOL`]: width below which an interval is treated as a point.
//! - [`safe_logistic`] / [`safe_logit`]: σ and σ⁻¹ without overflow.
//! - [`to_interval`] / [`from_interval`]: the box maps.

/// Clamp margin for probabilities fed to [`safe_logit`].
///
/// `p` is clamped into `[LOGIT_EPS, 1 − LOGIT_EPS]`, so points on a box edge
/// map to a large but finite `z` (≈ ±27.6).
pub const LOGIT_EPS: f64 = 1e-12;

/// Intervals narrower than this (relative to their magnitude) are degenerate.
pub const GENERAL_TOL: f64 = 1e-12;

/// Numerically stable logistic `σ(x) = 1 / (1 + exp(−x))`.
///
/// Evaluates `exp` only on non-positive arguments, so neither branch can
/// overflow.
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Stable logit `ln(p / (1 − p))` with `p` clamped by [`LOGIT_EPS`].
pub fn safe_logit(p: f64) -> f64 {
    let p = p.clamp(LOGIT_EPS, 1.0 - LOGIT_EPS);
    p.ln() - (-p).ln_1p()
}

/// Map `z ∈ ℝ` into `[lo, hi]`.
pub fn to_interval(z: f64, lo: f64, hi: f64) -> f64 {
    if is_degenerate(lo, hi) {
        return lo;
    }
    (lo + (hi - lo) * safe_logistic(z)).clamp(lo, hi)
}

/// Inverse of [`to_interval`]; degenerate intervals map to `0`.
pub fn from_interval(x: f64, lo: f64, hi: f64) -> f64 {
    if is_degenerate(lo, hi) {
        return 0.0;
    }
    safe_logit((x - lo) / (hi - lo))
}

fn is_degenerate(lo: f64, hi: f64) -> bool {
    (hi - lo) <= GENERAL_TOL * lo.abs().max(hi.abs()).max(1.0)
}
