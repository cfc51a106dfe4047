//! Quadratic line search for single-variable cost minimization.
//!
//! # Algorithm
//!
//! The search maintains a bracket of three points `lower < mid < upper`
//! believed to contain the minimum. Each iteration fits a quadratic through
//! the three cost values via one-sided slopes, evaluates the cost where that
//! quadratic's derivative vanishes, and updates the bracket around the new
//! point. A chord test detects costs whose midpoint lies above the straight
//! line between the bracket ends, a shape the convexity assumption cannot
//! handle.
//!
//! # When to Use
//!
//! The quadratic line search is appropriate when:
//! - The cost is smooth and convex (or nearly so) on the bracket
//! - Derivative information is unavailable or expensive
//! - The 1D solve is an inner building block that must be cheap, such as a
//!   line search inside a multi-parameter optimization
//!
//! # Limitations
//!
//! - **Single variable only**: works with [`CostProblem<1>`]
//! - **Convexity assumption**: non-convex costs terminate with
//!   [`Status::NonConvex`] instead of a minimizer
//! - **No bracketing guarantee**: if the bounds do not bracket the minimum,
//!   the search reports [`Status::OutsideBounds`] (or walks the bracket
//!   outward under [`EscapePolicy::Expand`], without a convergence
//!   guarantee)
//!
//! # Outcome classification
//!
//! Every run returns a [`Solution`] whose [`Status`] classifies the outcome;
//! failure classifications are values, not errors. On [`Status::NonConvex`],
//! [`Status::OutsideBounds`], and [`Status::MaxIters`] the reported `x` is
//! NaN — check the status (or NaN-ness) before trusting the estimate.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after evaluating the
//! interpolated candidate and before updating the bracket:
//!
//! - [`Event::Evaluated`] — evaluation succeeded
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or cost)
//!
//! Each event carries the current [`Bracket`], so a tracing observer can
//! reconstruct the full search trajectory. Observers can return
//! [`Action::StopEarly`] to halt immediately with the current midpoint.
//!
//! [`CostProblem<1>`]: plumb_core::CostProblem

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod init;
mod point;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use bracket::Bracket;
pub use config::{Config, ConfigError, EscapePolicy};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use plumb_core::{CostProblem, Model, Observer};

use search::search;

/// Finds the minimum of the cost using a quadratic line search.
///
/// `bounds` is the initial bracket `[lower, upper]`; the initial midpoint
/// defaults to its center unless [`Config::with_initial_estimate`] supplies
/// one. The observer receives an [`Event`] per iteration. See the
/// [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the bounds are not a valid bracket, the initial
/// estimate lies outside them, or the model or problem fails during
/// evaluation and the observer does not stop the solver first.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: CostProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bounds, config, observer)
}

/// Finds the minimum of the cost without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns an error if the bounds are not a valid bracket or the model or
/// problem fails during evaluation.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: CostProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bounds, config, ())
}
