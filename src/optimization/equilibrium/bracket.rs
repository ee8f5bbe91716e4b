//! Downhill bracketing of a scalar minimum.
//!
//! Starting from two points, step downhill with golden-ratio growth and
//! parabolic extrapolation until three points `a, b, c` satisfy
//! `f(b) <= f(a)` and `f(b) <= f(c)`. The result seeds Brent's method, which
//! needs a finite interval known to contain a minimum.
use crate::optimization::{
    equilibrium::NO_EQUILIBRIUM,
    errors::{OptError, OptResult},
};

/// Golden-ratio growth factor between successive downhill steps.
pub const GOLDEN: f64 = 1.618_034;
/// Floor on the parabola denominator.
const VERY_SMALL: f64 = 1e-21;

/// Three points bracketing a minimum, with their function values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub fa: f64,
    pub fb: f64,
    pub fc: f64,
    /// Number of function evaluations spent.
    pub evaluations: u64,
}

impl Bracket {
    /// Ordered `(min, max)` interval spanned by the outer points.
    pub fn interval(&self) -> (f64, f64) {
        if self.a <= self.c { (self.a, self.c) } else { (self.c, self.a) }
    }
}

/// Search downhill from `(xa, xb)` for a bracket of a minimum of `f`.
///
/// - Parabolic steps are capped at `grow_limit` times the current step.
/// - At most `max_iter` extrapolation steps are taken.
///
/// # Errors
/// - Propagates any error returned by `f`.
/// - [`OptError::Convergence`] when the iteration cap is exceeded, a
///   non-finite value ends the search, or a step would leave the finite
///   range.
pub fn bracket_minimum<F>(
    mut f: F, xa: f64, xb: f64, grow_limit: f64, max_iter: u64,
) -> OptResult<Bracket>
where
    F: FnMut(f64) -> OptResult<f64>,
{
    // Runaway growth must not reach the adapter as an infinite alpha.
    let mut eval = |x: f64| -> OptResult<f64> {
        if !x.is_finite() {
            return Err(OptError::Convergence { reason: NO_EQUILIBRIUM.to_string() });
        }
        f(x)
    };
    let (mut xa, mut xb) = (xa, xb);
    let mut fa = eval(xa)?;
    let mut fb = eval(xb)?;
    if fa < fb {
        std::mem::swap(&mut xa, &mut xb);
        std::mem::swap(&mut fa, &mut fb);
    }
    let mut xc = xb + GOLDEN * (xb - xa);
    let mut fc = eval(xc)?;
    let mut evaluations = 3;
    let mut iter = 0;

    while fc < fb {
        let tmp1 = (xb - xa) * (fb - fc);
        let tmp2 = (xb - xc) * (fb - fa);
        let val = tmp2 - tmp1;
        let denom = if val.abs() < VERY_SMALL { 2.0 * VERY_SMALL } else { 2.0 * val };
        let mut w = xb - ((xb - xc) * tmp2 - (xb - xa) * tmp1) / denom;
        let wlim = xb + grow_limit * (xc - xb);
        if iter >= max_iter {
            return Err(OptError::Convergence { reason: NO_EQUILIBRIUM.to_string() });
        }
        iter += 1;

        let mut fw;
        if (w - xc) * (xb - w) > 0.0 {
            // Parabolic minimum between b and c.
            fw = eval(w)?;
            evaluations += 1;
            if fw < fc {
                return finish(xb, w, xc, fb, fw, fc, evaluations);
            } else if fw > fb {
                return finish(xa, xb, w, fa, fb, fw, evaluations);
            }
            w = xc + GOLDEN * (xc - xb);
            fw = eval(w)?;
            evaluations += 1;
        } else if (w - wlim) * (wlim - xc) >= 0.0 {
            w = wlim;
            fw = eval(w)?;
            evaluations += 1;
        } else if (w - wlim) * (xc - w) > 0.0 {
            fw = eval(w)?;
            evaluations += 1;
            if fw < fc {
                xb = xc;
                xc = w;
                w = xc + GOLDEN * (xc - xb);
                fb = fc;
                fc = fw;
                fw = eval(w)?;
                evaluations += 1;
            }
        } else {
            w = xc + GOLDEN * (xc - xb);
            fw = eval(w)?;
            evaluations += 1;
        }
        xa = xb;
        xb = xc;
        xc = w;
        fa = fb;
        fb = fc;
        fc = fw;
    }
    finish(xa, xb, xc, fa, fb, fc, evaluations)
}

fn finish(
    a: f64, b: f64, c: f64, fa: f64, fb: f64, fc: f64, evaluations: u64,
) -> OptResult<Bracket> {
    let all_finite = [a, b, c, fa, fb, fc].iter().all(|v| v.is_finite());
    if !all_finite {
        return Err(OptError::Convergence { reason: NO_EQUILIBRIUM.to_string() });
    }
    Ok(Bracket { a, b, c, fa, fb, fc, evaluations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // A quadratic is bracketed in one parabolic step.
    //
    // Given
    // -----
    // - f(x) = (0.05·x − 0.45)², minimum at 9, start (0, 1).
    //
    // Expect
    // ------
    // - Bracket (1 + φ, 9, 9 + φ·(8 − φ)) with f(b) = 0.
    fn quadratic_is_bracketed_around_minimum() {
        // Arrange
        let f = |x: f64| -> OptResult<f64> { Ok((0.05 * x - 0.45).powi(2)) };

        // Act
        let bracket = bracket_minimum(f, 0.0, 1.0, 110.0, 1000).expect("bracket exists");

        // Assert
        assert_relative_eq!(bracket.a, 1.0 + GOLDEN, epsilon = 1e-12);
        assert_relative_eq!(bracket.b, 9.0, epsilon = 1e-9);
        assert!(bracket.fb <= bracket.fa && bracket.fb <= bracket.fc);
        let (lo, hi) = bracket.interval();
        assert!(lo < 9.0 && 9.0 < hi);
    }

    #[test]
    // Purpose
    // -------
    // A minimum behind the start points is found by walking backwards.
    //
    // Given
    // -----
    // - f(x) = (x + 30)², start (0, 1).
    //
    // Expect
    // ------
    // - Interval contains −30.
    fn minimum_behind_start_is_reached() {
        // Arrange
        let f = |x: f64| -> OptResult<f64> { Ok((x + 30.0).powi(2)) };

        // Act
        let bracket = bracket_minimum(f, 0.0, 1.0, 110.0, 1000).expect("bracket exists");

        // Assert
        let (lo, hi) = bracket.interval();
        assert!(lo <= -30.0 && -30.0 <= hi, "interval ({lo}, {hi}) should contain -30");
    }

    #[test]
    // Purpose
    // -------
    // A function without a minimum exhausts the iteration cap.
    //
    // Given
    // -----
    // - f(x) = −x (unbounded below), cap of 5 steps.
    //
    // Expect
    // ------
    // - `Convergence`.
    fn unbounded_function_fails_with_convergence_error() {
        // Arrange
        let f = |x: f64| -> OptResult<f64> { Ok(-x) };

        // Act
        let result = bracket_minimum(f, 0.0, 1.0, 110.0, 5);

        // Assert
        assert!(matches!(result, Err(OptError::Convergence { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Errors from the function abort the search unchanged.
    //
    // Given
    // -----
    // - f returning `NonFiniteCost` for x > 2.
    //
    // Expect
    // ------
    // - The same error is returned.
    fn function_errors_propagate() {
        // Arrange
        let f = |x: f64| -> OptResult<f64> {
            if x > 2.0 { Err(OptError::NonFiniteCost { value: f64::NAN }) } else { Ok(-x) }
        };

        // Act
        let result = bracket_minimum(f, 0.0, 1.0, 110.0, 1000);

        // Assert
        assert!(matches!(result, Err(OptError::NonFiniteCost { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Unbounded downhill growth stops before an infinite point is ever
    // evaluated.
    //
    // Given
    // -----
    // - f(x) = −x with an iteration cap far larger than the steps needed to
    //   overflow.
    //
    // Expect
    // ------
    // - `Convergence`; every evaluated x is finite.
    fn runaway_growth_stops_before_infinite_point() {
        // Arrange
        let mut seen = Vec::new();
        let f = |x: f64| -> OptResult<f64> {
            seen.push(x);
            Ok(-x)
        };

        // Act
        let result = bracket_minimum(f, 0.0, 1.0, 110.0, 1_000_000);

        // Assert
        assert!(matches!(result, Err(OptError::Convergence { .. })));
        assert!(seen.iter().all(|x| x.is_finite()));
    }
}
