use plumb_core::{CostProblem, Model, Observer};

use crate::optimization::EvalError;

use super::{Action, Bracket, Point};

/// Events emitted by the quadratic line search.
///
/// One event is emitted per iteration, after the interpolated candidate is
/// evaluated and before the bracket is updated. Each event carries the
/// bracket the candidate was interpolated from, so observers can trace the
/// full search trajectory (positions and costs) without a second diagnostic
/// code path in the solver.
pub enum Event<'a, M, P>
where
    M: Model,
    P: CostProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation of an interpolated candidate.
    Evaluated {
        /// The evaluated candidate (x and cost).
        point: Point,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,

        /// The bracket the candidate was interpolated from.
        bracket: Bracket,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// The x value where evaluation failed.
        x: f64,

        /// The bracket the candidate was interpolated from.
        bracket: Bracket,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or cost computation).
    ProblemFailed {
        /// The x value where evaluation failed.
        x: f64,

        /// The bracket the candidate was interpolated from.
        bracket: Bracket,

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: CostProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the bracket the candidate was interpolated from.
    #[must_use]
    pub fn bracket(&self) -> Bracket {
        match self {
            Self::Evaluated { bracket, .. }
            | Self::ModelFailed { bracket, .. }
            | Self::ProblemFailed { bracket, .. } => *bracket,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        x: f64,
        bracket: Bracket,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    x,
                    bracket,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    x,
                    bracket,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}
