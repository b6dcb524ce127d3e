/// Receives solver events and decides how the iteration should proceed.
///
/// The bisection solver reports every evaluation of `f` as an
/// [`Event`](crate::bisection::Event), endpoints included, so an observer can
/// count calls, trace the shrinking bracket through [`Logger`](crate::bisection::Logger),
/// or end the solve with [`Action::StopEarly`](crate::bisection::Action::StopEarly).
///
/// Returning `None` lets the solver continue unchanged. Any
/// `FnMut(&E) -> Option<A>` closure is an observer, and `()` never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
