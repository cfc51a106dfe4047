use plumb_core::{CostProblem, Model, Observer};

use crate::optimization::evaluate;

use super::{Action, Bracket, Error, Event, Point, state::State};

/// Seeds the search state by evaluating the three bracket points.
///
/// Evaluation failures here are fatal: the interpolation needs all three
/// costs, and with no complete bracket there is nothing to stop early with.
/// A failure event is still emitted so observers see the attempt; the
/// observer's action is ignored. Costs not yet evaluated appear as NaN in
/// the event's bracket.
pub(super) fn init<M, P, Obs>(
    model: &M,
    problem: &P,
    points: [f64; 3],
    observer: &mut Obs,
) -> Result<State<M::Input, M::Output>, Error>
where
    M: Model,
    P: CostProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let [lower_x, mid_x, upper_x] = points;
    let mut partial = Bracket::new(
        Point::new(lower_x, f64::NAN),
        Point::new(mid_x, f64::NAN),
        Point::new(upper_x, f64::NAN),
    );

    let lower = match evaluate(model, problem, [lower_x]) {
        Ok(eval) => eval,
        Err(e) => {
            let _ = Event::emit_failure(lower_x, partial, &e, observer);
            return Err(e.into());
        }
    };
    partial.lower = Point::from(&lower);

    let mid = match evaluate(model, problem, [mid_x]) {
        Ok(eval) => eval,
        Err(e) => {
            let _ = Event::emit_failure(mid_x, partial, &e, observer);
            return Err(e.into());
        }
    };
    partial.mid = Point::from(&mid);

    let upper = match evaluate(model, problem, [upper_x]) {
        Ok(eval) => eval,
        Err(e) => {
            let _ = Event::emit_failure(upper_x, partial, &e, observer);
            return Err(e.into());
        }
    };

    Ok(State::new(lower, mid, upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use thiserror::Error;

    struct Identity;

    impl Model for Identity {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            Ok(*x)
        }
    }

    struct CostIsOutput;

    impl CostProblem<1> for CostIsOutput {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(x[0])
        }

        fn cost(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
            Ok(*output)
        }
    }

    #[test]
    fn seeds_state_from_the_three_points() {
        let state = init(&Identity, &CostIsOutput, [0.0, 1.0, 4.0], &mut ())
            .expect("evaluation cannot fail");

        let bracket = state.bracket();
        assert_relative_eq!(bracket.lower.x, 0.0);
        assert_relative_eq!(bracket.mid.x, 1.0);
        assert_relative_eq!(bracket.upper.x, 4.0);
        assert_relative_eq!(bracket.mid.cost, 1.0);
    }

    #[derive(Debug, Error)]
    #[error("fails above {threshold}")]
    struct ThresholdError {
        threshold: f64,
    }

    struct FailsAbove {
        threshold: f64,
    }

    impl Model for FailsAbove {
        type Input = f64;
        type Output = f64;
        type Error = ThresholdError;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            if *x > self.threshold {
                Err(ThresholdError {
                    threshold: self.threshold,
                })
            } else {
                Ok(*x)
            }
        }
    }

    #[test]
    fn failure_notifies_observer_then_errors() {
        let model = FailsAbove { threshold: 2.0 };

        let mut failed_at = None;
        let mut observer = |event: &Event<'_, _, _>| {
            if matches!(event, Event::ModelFailed { .. }) {
                failed_at = Some(event.x());
            }
            None
        };

        let result = init(&model, &CostIsOutput, [0.0, 3.0, 6.0], &mut observer);

        assert!(matches!(result, Err(Error::Model(_))));
        assert_eq!(failed_at, Some(3.0));
    }

    #[test]
    fn failure_event_carries_costs_evaluated_so_far() {
        let model = FailsAbove { threshold: 2.0 };

        let mut seen = None;
        let mut observer = |event: &Event<'_, _, _>| {
            seen = Some(event.bracket());
            None
        };

        let _ = init(&model, &CostIsOutput, [0.0, 3.0, 6.0], &mut observer);

        let bracket = seen.expect("failure event should fire");
        assert_relative_eq!(bracket.lower.cost, 0.0);
        assert!(bracket.mid.cost.is_nan());
        assert!(bracket.upper.cost.is_nan());
    }
}
