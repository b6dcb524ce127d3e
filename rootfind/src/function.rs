use std::convert::Infallible;

/// A scalar function `f: f64 -> f64` that a solver can evaluate.
///
/// Closures of the form `FnMut(f64) -> f64` implement this trait and can
/// never fail. Implement it on your own type when evaluation can fail, for
/// example when `f` wraps a model call that may reject its input.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&mut self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: FnMut(f64) -> f64,
{
    type Error = Infallible;

    fn call(&mut self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
