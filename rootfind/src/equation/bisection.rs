mod bracket;
mod config;
mod error;
mod event;
mod logger;
mod solution;

pub use bracket::Bracket;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use logger::Logger;
pub use solution::{Solution, Status};

use crate::{function::Function, observe::Observer};

/// Finds a root of `f` inside `bracket` using the bisection method.
///
/// The endpoints are checked first: if `|f(a)| < residual_tol` the solver
/// returns `a`, then likewise for `b`. Otherwise `f(a)` and `f(b)` must not
/// share a sign. Each iteration evaluates the midpoint `c`, returns it if
/// `|f(c)| < residual_tol`, and otherwise keeps `[c, b]` when
/// `f(c) * f(a) >= 0` or `[a, c]` when it is negative.
///
/// Observers see every evaluation, including both endpoints.
///
/// # Errors
///
/// Returns [`Error::NoBracket`] if the endpoints share a sign,
/// [`Error::IterationLimitExceeded`] if no midpoint converges within
/// `config.max_iters` steps, [`Error::InvalidConfig`] for a bad tolerance,
/// or [`Error::Function`] if `f` fails to evaluate.
pub fn solve<Obs>(
    f: &mut impl Function,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;
    let tol = config.residual_tol;
    let [a, b] = bracket;

    let fa = evaluate(f, a)?;
    if let Some(action) = observer.observe(&Event::Left { x: a, fx: fa }) {
        match action {
            Action::StopEarly => {
                return Ok(Solution::new(Status::StoppedByObserver, a, fa, 0));
            }
        }
    }
    if fa.abs() < tol {
        return Ok(Solution::new(Status::Converged, a, fa, 0));
    }

    let fb = evaluate(f, b)?;
    if let Some(action) = observer.observe(&Event::Right { x: b, fx: fb }) {
        match action {
            Action::StopEarly => {
                return Ok(Solution::new(Status::StoppedByObserver, b, fb, 0));
            }
        }
    }
    if fb.abs() < tol {
        return Ok(Solution::new(Status::Converged, b, fb, 0));
    }

    if fa * fb > 0.0 {
        return Err(Error::NoBracket { a, b, fa, fb });
    }

    let mut bracket = Bracket::new(a, b, fa);

    for iter in 1..=config.max_iters {
        let c = bracket.midpoint();
        let fc = evaluate(f, c)?;

        let event = Event::Midpoint {
            iter,
            x: c,
            fx: fc,
            bracket: &bracket,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(Status::StoppedByObserver, c, fc, iter));
                }
            }
        }

        if fc.abs() < tol {
            return Ok(Solution::new(Status::Converged, c, fc, iter));
        }

        bracket.shrink(c, fc);
    }

    Err(Error::IterationLimitExceeded {
        max_iters: config.max_iters,
        bracket: bracket.as_array(),
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    f: &mut impl Function,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}

fn evaluate(f: &mut impl Function, x: f64) -> Result<f64, Error> {
    f.call(x).map_err(|err| Error::Function(Box::new(err)))
}
