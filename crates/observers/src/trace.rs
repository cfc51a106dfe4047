use plumb_core::{CostProblem, Model, Observer};
use plumb_solvers::optimization::quadratic::{Action, Event};
use tracing::{debug, warn};

/// Logs every quadratic line search event through `tracing`.
///
/// Each successful evaluation is logged at `debug` with the candidate and
/// the full bracket (positions and costs), so a run can be inspected
/// iteration by iteration. Evaluation failures are logged at `warn`.
///
/// The observer never influences the search; it always returns `None`.
///
/// # Example
///
/// ```ignore
/// let solution = quadratic::minimize(
///     &model,
///     &problem,
///     [-1.0, 1.0],
///     &Config::default(),
///     TraceObserver::new(),
/// )?;
/// ```
#[derive(Debug, Default)]
pub struct TraceObserver {
    iter: usize,
}

impl TraceObserver {
    /// Creates a trace observer with its iteration counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a, M, P> Observer<Event<'a, M, P>, Action> for TraceObserver
where
    M: Model,
    P: CostProblem<1, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'a, M, P>) -> Option<Action> {
        self.iter += 1;

        match event {
            Event::Evaluated { point, bracket, .. } => {
                debug!(
                    iter = self.iter,
                    x = point.x,
                    cost = point.cost,
                    lower = bracket.lower.x,
                    lower_cost = bracket.lower.cost,
                    mid = bracket.mid.x,
                    mid_cost = bracket.mid.cost,
                    upper = bracket.upper.x,
                    upper_cost = bracket.upper.cost,
                    "evaluated candidate"
                );
            }
            Event::ModelFailed { x, error, .. } => {
                warn!(iter = self.iter, x, error = %error, "model call failed");
            }
            Event::ProblemFailed { x, error, .. } => {
                warn!(iter = self.iter, x, error = %error, "problem error");
            }
        }

        None
    }
}
