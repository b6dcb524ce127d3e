//! Bracketed root finding for scalar functions.
//!
//! The [`bisect`] entry point halves an interval whose endpoints have
//! opposite-sign function values until a midpoint satisfies
//! `|f(x)| < residual_tol`. It is meant as a dependable fallback for
//! higher-level numerical code that already knows a bracket.
//!
//! ```
//! let root = rootfind::bisect(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root * root - 2.0).abs() < 1e-13);
//! ```
//!
//! Failures come back as [`bisection::Error`] values, never as panics or
//! console output. Use [`equation::bisection::solve`] directly to observe
//! each evaluation or to receive the full [`bisection::Solution`].

pub mod equation;
pub mod function;
pub mod observe;

pub use equation::bisection;
pub use function::Function;
pub use observe::Observer;

use equation::bisection::{Config, Error, Logger};

/// Finds a root of `f` between `a` and `b` with the default [`Config`].
///
/// Tolerance is `1e-13` on `|f(x)|` and at most 100 bisection steps run.
///
/// # Errors
///
/// See [`bisection::solve`].
pub fn bisect(f: impl Function, a: f64, b: f64) -> Result<f64, Error> {
    bisect_with(f, a, b, &Config::default())
}

/// Finds a root of `f` between `a` and `b` with a custom [`Config`].
///
/// Evaluations are traced through [`Logger`], and a failed solve emits a
/// `debug` record before the error is returned.
///
/// # Errors
///
/// See [`bisection::solve`].
pub fn bisect_with(mut f: impl Function, a: f64, b: f64, config: &Config) -> Result<f64, Error> {
    bisection::solve(&mut f, [a, b], config, Logger)
        .map(|solution| solution.x)
        .inspect_err(|err| {
            log::debug!(target: "rootfind::bisection", "bisect failed: {err}");
        })
}
