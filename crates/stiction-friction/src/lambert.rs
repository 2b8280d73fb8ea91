//! Principal branch of the Lambert W function.
//!
//! `W₀(x)` is the real solution `w ≥ -1` of `w·eʷ = x`, defined for
//! `x ≥ -1/e`. The dry-friction curve only needs real arguments in
//! `[-1/e, 0)`, but the evaluator covers the whole principal branch.
//!
//! The evaluator uses Halley's iteration from a branch-point series guess near
//! `-1/e`, `ln(1 + x)` for moderate arguments, and the asymptotic
//! `ln x - ln ln x` expansion for large ones.

use core::f64::consts::E;

/// `-1/e`, the branch point of W.
pub const BRANCH_POINT: f64 = -1.0 / E;

/// Arguments this far below [`BRANCH_POINT`] are treated as rounding noise
/// and mapped to `W₀ = -1`.
const BRANCH_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Below this distance parameter the branch-point series is already exact to
/// double precision.
const SERIES_ONLY_BELOW: f64 = 1e-4;

const MAX_ITERATIONS: usize = 64;
const RELATIVE_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Failure to evaluate W₀.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LambertError {
    /// The argument is below `-1/e` or not finite.
    #[error("Lambert W0 is undefined for argument {argument} (requires a finite x >= -1/e)")]
    OutOfBranch {
        /// The rejected argument.
        argument: f64,
    },

    /// Halley's iteration did not settle.
    #[error("Lambert W0 did not converge for argument {argument}")]
    NoConvergence {
        /// The argument being evaluated.
        argument: f64,
    },
}

/// Evaluate the principal branch `W₀(x)`.
///
/// # Errors
///
/// - [`LambertError::OutOfBranch`] for `x < -1/e`, NaN, or infinities.
/// - [`LambertError::NoConvergence`] if the iteration fails to settle.
///
/// # Example
///
/// ```
/// use stiction_friction::lambert::lambert_w0;
///
/// let w = lambert_w0(1.0)?;
/// assert!((w * w.exp() - 1.0).abs() < 1e-15);
/// # Ok::<(), stiction_friction::lambert::LambertError>(())
/// ```
pub fn lambert_w0(x: f64) -> Result<f64, LambertError> {
    if !x.is_finite() {
        return Err(LambertError::OutOfBranch { argument: x });
    }
    if x < BRANCH_POINT {
        return if x >= BRANCH_POINT - BRANCH_TOLERANCE {
            Ok(-1.0)
        } else {
            Err(LambertError::OutOfBranch { argument: x })
        };
    }

    // Distance parameter p = sqrt(2(e·x + 1)); W₀ = -1 + p - p²/3 + 11p³/72 - …
    let p = (2.0 * E.mul_add(x, 1.0)).max(0.0).sqrt();
    if p < SERIES_ONLY_BELOW {
        return Ok(branch_series(p));
    }

    let mut w = initial_guess(x, p);
    for _ in 0..MAX_ITERATIONS {
        let ew = w.exp();
        let residual = w.mul_add(ew, -x);
        let w1 = w + 1.0;
        let denom = ew * w1 - (w + 2.0) * residual / (2.0 * w1);
        let next = w - residual / denom;

        if !next.is_finite() {
            return Err(LambertError::NoConvergence { argument: x });
        }
        if (next - w).abs() <= RELATIVE_TOLERANCE * (1.0 + next.abs()) {
            return Ok(next);
        }
        w = next;
    }

    Err(LambertError::NoConvergence { argument: x })
}

fn branch_series(p: f64) -> f64 {
    let p2 = p * p;
    -1.0 + p - p2 / 3.0 + 11.0 / 72.0 * p2 * p
}

fn initial_guess(x: f64, p: f64) -> f64 {
    if x < -0.25 {
        branch_series(p)
    } else if x < 3.0 {
        x.ln_1p()
    } else {
        let l1 = x.ln();
        let l2 = l1.ln();
        l1 - l2 + l2 / l1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_known_values() {
        assert!(must(lambert_w0(0.0)).abs() < 1e-300);
        assert!((must(lambert_w0(E)) - 1.0).abs() < 1e-15);
        // Omega constant
        assert!((must(lambert_w0(1.0)) - 0.567_143_290_409_783_8).abs() < 1e-15);
        assert!((must(lambert_w0(-0.25)) - (-0.357_402_956_181_388_9)).abs() < 1e-14);
    }

    #[test]
    fn test_inverse_relation_across_branch() {
        let args = [
            BRANCH_POINT + 1e-12,
            BRANCH_POINT + 1e-6,
            -0.367_67,
            -0.3,
            -0.1,
            -1e-3,
            -1e-9,
            1e-9,
            0.5,
            2.0,
            10.0,
            1e3,
            1e12,
        ];
        for x in args {
            let w = must(lambert_w0(x));
            assert!(w >= -1.0, "W0({x}) = {w} left the principal branch");
            let back = w * w.exp();
            let tolerance = 1e-12 * x.abs().max(1.0);
            assert!((back - x).abs() < tolerance, "W0({x}) = {w}, w·e^w = {back}");
        }
    }

    #[test]
    fn test_branch_point() {
        let w = must(lambert_w0(BRANCH_POINT));
        assert!((w + 1.0).abs() < 1e-7);

        let below_by_rounding = BRANCH_POINT - f64::EPSILON;
        assert!((must(lambert_w0(below_by_rounding)) + 1.0).abs() < 1e-7);
    }

    #[test]
    fn test_monotone_on_negative_axis() {
        let mut previous = -1.0;
        for i in 1..=400 {
            let x = BRANCH_POINT * (1.0 - f64::from(i) / 400.0);
            let w = must(lambert_w0(x));
            assert!(w >= previous, "W0 not increasing at {x}");
            previous = w;
        }
    }

    #[test]
    fn test_out_of_branch_rejected() {
        assert!(matches!(lambert_w0(-0.5), Err(LambertError::OutOfBranch { .. })));
        assert!(matches!(lambert_w0(f64::NAN), Err(LambertError::OutOfBranch { .. })));
        assert!(matches!(lambert_w0(f64::INFINITY), Err(LambertError::OutOfBranch { .. })));
        assert!(matches!(lambert_w0(f64::NEG_INFINITY), Err(LambertError::OutOfBranch { .. })));
    }

    #[test]
    fn test_error_display() {
        let err = LambertError::OutOfBranch { argument: -0.5 };
        assert!(err.to_string().contains("-0.5"));
    }
}
