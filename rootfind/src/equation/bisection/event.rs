use super::Bracket;

/// Event emitted by the bisection solver for each function evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// Evaluation of the `a` endpoint.
    Left {
        /// The x value that was evaluated.
        x: f64,
        /// The function value at `x`.
        fx: f64,
    },
    /// Evaluation of the `b` endpoint.
    Right {
        /// The x value that was evaluated.
        x: f64,
        /// The function value at `x`.
        fx: f64,
    },
    /// Midpoint evaluation inside the main loop.
    Midpoint {
        /// Iteration counter (1-based within the bisection loop).
        iter: usize,
        /// The x value that was evaluated.
        x: f64,
        /// The function value at `x`.
        fx: f64,
        /// Search bracket the midpoint was taken from.
        bracket: &'a Bracket,
    },
}

impl Event<'_> {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Left { x, .. } | Event::Right { x, .. } | Event::Midpoint { x, .. } => *x,
        }
    }

    /// Returns the function value at [`Event::x`].
    #[must_use]
    pub fn fx(&self) -> f64 {
        match self {
            Event::Left { fx, .. } | Event::Right { fx, .. } | Event::Midpoint { fx, .. } => *fx,
        }
    }
}

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and report the point just evaluated.
    StopEarly,
}
