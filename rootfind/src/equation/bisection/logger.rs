use crate::observe::Observer;

use super::{Action, Event};

/// Observer that forwards every bisection event to the [`log`] facade.
///
/// Records are emitted at `trace` level under the `rootfind::bisection`
/// target and never request an action.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

const TARGET: &str = "rootfind::bisection";

impl Observer<Event<'_>, Action> for Logger {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        match event {
            Event::Left { x, fx } => log::trace!(target: TARGET, "f(a={x}) = {fx}"),
            Event::Right { x, fx } => log::trace!(target: TARGET, "f(b={x}) = {fx}"),
            Event::Midpoint {
                iter,
                x,
                fx,
                bracket,
            } => log::trace!(
                target: TARGET,
                "iter {iter}: bracket {:?} (width {}), f(c={x}) = {fx}",
                bracket.as_array(),
                bracket.width()
            ),
        }
        None
    }
}
