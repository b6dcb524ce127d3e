/// Indicates how a successful solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Found a point with `|f(x)| < residual_tol`.
    Converged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Root estimate.
    pub x: f64,
    /// Function value at `x`.
    pub residual: f64,
    /// Main-loop iterations performed, zero for a pre-satisfied endpoint.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, x: f64, residual: f64, iters: usize) -> Self {
        Self {
            status,
            x,
            residual,
            iters,
        }
    }
}
