/// Receives solver events and optionally returns control actions.
///
/// Each solver defines its own event type `E` (what happened) and action
/// type `A` (what the observer may ask the solver to do). Observers are
/// purely optional collaborators: returning `None` leaves the solver's
/// behavior unchanged.
///
/// The unit type `()` is the no-op observer, and any
/// `FnMut(&E) -> Option<A>` closure is an observer, so ad-hoc observation
/// needs no new types:
///
/// ```
/// use plumb_core::Observer;
///
/// let mut seen = 0;
/// let mut observer = |_event: &f64| {
///     seen += 1;
///     None::<()>
/// };
/// observer.observe(&1.0);
/// assert_eq!(seen, 1);
/// ```
pub trait Observer<E, A> {
    /// Handles an event, optionally returning an action for the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// The no-op observer.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_observer_returns_no_action() {
        let mut observer = ();
        let action: Option<u8> = observer.observe(&"event");
        assert!(action.is_none());
    }

    #[test]
    fn closure_observer_can_capture_state() {
        let mut events = Vec::new();
        let mut observer = |event: &i32| {
            events.push(*event);
            if *event > 1 { Some("stop") } else { None }
        };

        assert!(Observer::<i32, &str>::observe(&mut observer, &1).is_none());
        assert_eq!(Observer::<i32, &str>::observe(&mut observer, &2), Some("stop"));
        assert_eq!(events, vec![1, 2]);
    }
}
