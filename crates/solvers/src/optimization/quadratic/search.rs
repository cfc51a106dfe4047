use plumb_core::{CostProblem, Model, Observer};

use crate::optimization::{Evaluation, evaluate};

use super::{
    Action, Bracket, Config, Error, Event, Point, Solution,
    bracket::Placement,
    config::EscapePolicy,
    init::init,
    solution::Status,
};

/// Core quadratic line search implementation.
///
/// One loop serves every mode of operation; tracing and progress reporting
/// hang off the observer rather than a second copy of the algorithm.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: CostProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let [lower, upper] = bounds;
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(Error::InvalidBracket { lower, upper });
    }

    let mid = config
        .initial_estimate()
        .unwrap_or_else(|| 0.5 * (lower + upper));
    if !(lower < mid && mid < upper) {
        return Err(Error::EstimateOutsideBracket {
            estimate: mid,
            lower,
            upper,
        });
    }

    let value_tol = config.value_tol().unwrap_or(1e-3 * (upper - lower));

    let mut state = init(model, problem, [lower, mid, upper], &mut observer)?;

    for iter in 1..=config.max_iters() {
        if state.is_converged(value_tol) {
            return Ok(state.into_solution(Status::Converged, iter - 1));
        }

        let bracket = state.bracket();

        if bracket.violates_convexity() {
            // A narrow bracket side or a nearly flat cost is accepted as
            // convergence; otherwise the shape rules the method out.
            let acceptable = bracket.narrow_side() < value_tol
                || bracket.relative_spread() < config.function_tol();
            let status = if acceptable {
                Status::Converged
            } else {
                Status::NonConvex
            };
            return Ok(state.into_solution(status, iter - 1));
        }

        let candidate = bracket.candidate();
        if !candidate.is_finite() {
            // Colinear bracket points: the interpolation has no vertex.
            return Ok(state.into_solution(Status::Degenerate, iter));
        }

        let eval = match eval_and_observe(model, problem, candidate, bracket, &mut observer)? {
            EvalOutcome::Continue(eval) => eval,
            EvalOutcome::StopEarly => {
                return Ok(state.into_solution(Status::StoppedByObserver, iter));
            }
        };

        if !eval.cost.is_finite() {
            return Ok(state.into_solution(Status::Degenerate, iter));
        }

        let worse = eval.cost > bracket.mid.cost;
        match bracket.placement(candidate) {
            Placement::BelowLower => {
                if config.escape() == EscapePolicy::Fail {
                    return Ok(state.into_solution(Status::OutsideBounds, iter));
                }
                state.expand_down(eval);
            }
            Placement::LowerHalf => state.narrow_lower_half(eval, worse),
            Placement::AtMid => {
                // The interpolation reproduced the midpoint; the iteration
                // is at a fixed point and cannot improve on it.
                return Ok(state.into_solution(Status::Converged, iter));
            }
            Placement::UpperHalf => state.narrow_upper_half(eval, worse),
            Placement::AboveUpper => {
                if config.escape() == EscapePolicy::Fail {
                    return Ok(state.into_solution(Status::OutsideBounds, iter));
                }
                state.expand_up(eval);
            }
        }
    }

    // The final budgeted update is not followed by a top-of-loop check.
    let status = if state.is_converged(value_tol) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(state.into_solution(status, config.max_iters()))
}

// ============================================================================
// Eval + observe helper
// ============================================================================

enum EvalOutcome<I, O> {
    Continue(Evaluation<I, O, 1>),
    StopEarly,
}

/// Evaluate at `x`, emit the event, and handle the observer action.
fn eval_and_observe<M, P, Obs>(
    model: &M,
    problem: &P,
    x: f64,
    bracket: Bracket,
    observer: &mut Obs,
) -> Result<EvalOutcome<M::Input, M::Output>, Error>
where
    M: Model,
    P: CostProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    match evaluate(model, problem, [x]) {
        Ok(eval) => {
            let event = Event::Evaluated {
                point: Point::from(&eval),
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                bracket,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
                None => Ok(EvalOutcome::Continue(eval)),
            }
        }
        Err(e) => match Event::emit_failure(x, bracket, &e, observer) {
            Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
            None => Err(e.into()),
        },
    }
}
