//! Solvers that find roots of scalar equations `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed progress on a bracketing interval

pub mod bisection;
