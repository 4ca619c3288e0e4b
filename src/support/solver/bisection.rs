//! Bisection root finder over a bracketing interval.
//!
//! Finds `x` with `|f(x)|` below an absolute tolerance for a continuous
//! function that changes sign across the bracket. The iteration count is
//! hard-capped, so a solve always terminates, and every function
//! evaluation is checked for finiteness before its sign is trusted: a NaN
//! or infinite residual aborts the solve instead of steering it.
//!
//! The infiltration model solves its enclosure-pressure balance with this
//! finder over a [−100, 100] Pa bracket; the default tolerances are sized
//! for that scale.

use thiserror::Error;

/// Solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Maximum iteration count.
    pub max_iters: usize,

    /// Absolute tolerance on the bracket width.
    pub x_abs_tol: f64,

    /// Absolute tolerance on the function value at the root.
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            x_abs_tol: 2.22e-15,
            residual_tol: 1e-8,
        }
    }
}

/// A located root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Abscissa where the residual fell below tolerance.
    pub x: f64,

    /// Iterations performed.
    pub iters: usize,
}

/// Errors that can occur while solving.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BisectionError {
    /// The function has the same sign at both bracket endpoints.
    #[error("bracket endpoints do not enclose a sign change")]
    NoRootBracket,

    /// The function evaluated to NaN or an infinity.
    #[error("function value is not finite at x = {x}")]
    NonFinite { x: f64 },

    /// The solver stalled or hit the iteration limit without converging.
    #[error("no convergence after {iters} iterations")]
    NotConverged { iters: usize },
}

/// Finds a root of `f` within `[lo, hi]`.
///
/// Either endpoint already within the residual tolerance is returned
/// immediately. Otherwise the endpoints must enclose a sign change and the
/// bracket is narrowed until the midpoint residual falls below tolerance,
/// the bracket collapses, or the iteration limit runs out.
///
/// ```
/// use ventilation_models::support::solver::bisection::{self, Config};
///
/// let root = bisection::solve(|x| x * x - 4.0, [0.0, 10.0], &Config::default()).unwrap();
/// assert!((root.x - 2.0).abs() < 1e-8);
/// ```
///
/// # Errors
///
/// Returns a [`BisectionError`] if the endpoints do not bracket a root, if
/// `f` produces a non-finite value, or if the solve does not converge
/// within `config.max_iters` iterations.
pub fn solve<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Root, BisectionError>
where
    F: Fn(f64) -> f64,
{
    let [mut lo, mut hi] = bracket;
    let mut f_lo = checked(&f, lo)?;
    let mut f_hi = checked(&f, hi)?;

    if f_lo.abs() < config.residual_tol {
        return Ok(Root { x: lo, iters: 0 });
    }
    if f_hi.abs() < config.residual_tol {
        return Ok(Root { x: hi, iters: 0 });
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(BisectionError::NoRootBracket);
    }

    let mut mid = 0.5 * (lo + hi);
    for iters in 0..=config.max_iters {
        // Both the residual spread and the bracket width are below
        // tolerance; the midpoint is as good as it gets.
        if (f_hi - f_lo).abs() < config.residual_tol / 2.0 && hi - lo < config.x_abs_tol {
            return Ok(Root { x: mid, iters });
        }

        // The midpoint collapsed onto an endpoint; no further progress is
        // possible at floating-point resolution.
        if lo == mid || hi == mid {
            return Err(BisectionError::NotConverged { iters });
        }

        let f_mid = checked(&f, mid)?;
        if f_mid.abs() < config.residual_tol {
            return Ok(Root { x: mid, iters });
        }

        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
            f_hi = f_mid;
        }

        mid = 0.5 * (lo + hi);
    }

    Err(BisectionError::NotConverged {
        iters: config.max_iters,
    })
}

fn checked<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<f64, BisectionError> {
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BisectionError::NonFinite { x })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn finds_a_simple_root() {
        let root = solve(|x| x * x - 4.0, [0.0, 10.0], &Config::default()).unwrap();
        assert_abs_diff_eq!(root.x, 2.0, epsilon = 1e-7);
    }

    #[test]
    fn finds_a_root_with_negative_slope() {
        let root = solve(|x| 1.0 - x, [-10.0, 10.0], &Config::default()).unwrap();
        assert_abs_diff_eq!(root.x, 1.0, epsilon = 1e-7);
    }

    #[test]
    fn returns_an_endpoint_already_at_the_root() {
        let root = solve(|x| x, [0.0, 5.0], &Config::default()).unwrap();
        assert_eq!(root.x, 0.0);
        assert_eq!(root.iters, 0);
    }

    #[test]
    fn rejects_a_sign_constant_function() {
        let result = solve(|_| 1.0, [-1.0, 1.0], &Config::default());
        assert_eq!(result, Err(BisectionError::NoRootBracket));
    }

    #[test]
    fn reports_a_stall_on_a_sign_step() {
        // Sign changes at an irrational point with no residual below
        // tolerance on either side, so the bracket collapses to adjacent
        // floats and the solve must give up rather than spin.
        let step = |x: f64| if x < std::f64::consts::PI { -1.0 } else { 1.0 };
        let result = solve(step, [0.0, 10.0], &Config::default());
        assert!(matches!(result, Err(BisectionError::NotConverged { .. })));
    }

    #[test]
    fn surfaces_non_finite_values() {
        let result = solve(|x| 1.0 / x, [-1.0, 1.0], &Config::default());
        assert!(matches!(
            result,
            Err(BisectionError::NonFinite { .. })
        ));
    }
}
