use std::error::Error as StdError;

use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    /// `f(a)` and `f(b)` share a sign, so the interval is not a bracket.
    #[error("endpoints do not bracket a root: f({a})={fa}, f({b})={fb}")]
    NoBracket { a: f64, b: f64, fa: f64, fb: f64 },

    /// No midpoint met the residual tolerance within the iteration cap.
    #[error("maximum iterations exceeded ({max_iters}), final bracket {bracket:?}")]
    IterationLimitExceeded { max_iters: usize, bracket: [f64; 2] },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}
