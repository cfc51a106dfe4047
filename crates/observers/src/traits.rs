//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types,
//! enabling observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasCost`] — events that carry a cost value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use plumb_core::Observer;
//! use plumb_observers::traits::{CanStopEarly, HasCost};
//!
//! /// Stops the solver once any evaluation beats a target cost.
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasCost, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.cost() < self.target).then(A::stop_early)
//!     }
//! }
//! ```

use plumb_core::{CostProblem, Model};

use plumb_solvers::optimization::quadratic;

/// An event that carries a cost value.
pub trait HasCost {
    /// Returns the cost for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no cost is
    /// available.
    fn cost(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasCost for quadratic::Event ---

impl<M, P> HasCost for quadratic::Event<'_, M, P>
where
    M: Model,
    P: CostProblem<1, Input = M::Input, Output = M::Output>,
{
    fn cost(&self) -> f64 {
        match self {
            quadratic::Event::Evaluated { point, .. } => point.cost,
            quadratic::Event::ModelFailed { .. } | quadratic::Event::ProblemFailed { .. } => {
                f64::NAN
            }
        }
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for quadratic::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    use plumb_core::Observer;
    use plumb_solvers::optimization::quadratic::{Config, Status, minimize};

    struct Parabola;

    impl Model for Parabola {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            Ok((x - 2.0).powi(2))
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

    /// The doc example observer, exercised against the real solver.
    struct GoodEnough {
        target: f64,
    }

    impl<E: HasCost, A: CanStopEarly> Observer<E, A> for GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.cost() < self.target).then(A::stop_early)
        }
    }

    #[test]
    fn capability_observer_stops_the_quadratic_solver() {
        // The first candidate lands near the minimum, so its cost is far
        // below the target and the observer stops the run.
        let observer = GoodEnough { target: 1.0 };

        let solution = minimize(
            &Parabola,
            &CostIsOutput,
            [-5.0, 5.0],
            &Config::default(),
            observer,
        )
        .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
    }

    #[test]
    fn capability_observer_lets_an_unremarkable_run_finish() {
        // An unreachable target never triggers the stop.
        let observer = GoodEnough { target: -1.0 };

        let solution = minimize(
            &Parabola,
            &CostIsOutput,
            [-5.0, 5.0],
            &Config::default(),
            observer,
        )
        .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-2);
    }
}
