use thiserror::Error;

/// Errors returned by [`Config::validate`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The residual tolerance is NaN or infinite.
    #[error("residual_tol must be finite, got {0}")]
    NonFiniteResidualTol(f64),
    /// The residual tolerance is zero or negative.
    #[error("residual_tol must be positive, got {0}")]
    NonPositiveResidualTol(f64),
}

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// A point `x` is accepted as a root when `|f(x)| < residual_tol`.
    pub residual_tol: f64,
    /// Hard cap on the number of bisection steps.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            residual_tol: 1e-13,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Validates that the residual tolerance is finite and positive.
    ///
    /// Any `max_iters` is accepted, including zero.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the invalid tolerance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.residual_tol.is_finite() {
            return Err(ConfigError::NonFiniteResidualTol(self.residual_tol));
        }
        if self.residual_tol <= 0.0 {
            return Err(ConfigError::NonPositiveResidualTol(self.residual_tol));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_iters, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerances() {
        let config = Config {
            residual_tol: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveResidualTol(_))
        ));

        let config = Config {
            residual_tol: f64::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteResidualTol(_))
        ));
    }

    #[test]
    fn accepts_zero_max_iters() {
        let config = Config {
            max_iters: 0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
