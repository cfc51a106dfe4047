//! Traces a quadratic line search iteration by iteration.
//!
//! Minimizes f(x) = (x − 2)² on [−5, 5] with a [`TraceObserver`] attached,
//! logging each interpolated candidate and the surrounding bracket.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trace -p plumb-observers
//! ```

use std::{convert::Infallible, error::Error};

use plumb_core::{CostProblem, Model};
use plumb_observers::TraceObserver;
use plumb_solvers::optimization::quadratic;

/// A model that evaluates (x − 2)².
struct Parabola;

impl Model for Parabola {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Infallible> {
        Ok((x - 2.0).powi(2))
    }
}

/// Cost: just use the model output as the cost.
struct CostIsOutput;

impl CostProblem<1> for CostIsOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn cost(&self, _input: &f64, output: &f64) -> Result<f64, Infallible> {
        Ok(*output)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let solution = quadratic::minimize(
        &Parabola,
        &CostIsOutput,
        [-5.0, 5.0],
        &quadratic::Config::default(),
        TraceObserver::new(),
    )?;

    println!(
        "status: {:?}, x: {}, cost: {}, iterations: {}",
        solution.status, solution.x, solution.cost, solution.iters
    );

    Ok(())
}
