//! Solvers for cost problems: finding the variables that minimize a cost.
//!
//! A [`CostProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and extracts a scalar cost. Solvers in this module
//! search for the `x` that minimizes that cost.
//!
//! # Solvers
//!
//! - [`quadratic`] — line search over a bracketed interval using inverse
//!   quadratic interpolation, for smooth convex costs
//!
//! [`CostProblem`]: plumb_core::CostProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod quadratic;
