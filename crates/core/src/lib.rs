//! Core traits and types for the plumb solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions
//! - [`CostProblem`] — adapts solver variables to model inputs and extracts
//!   a scalar cost from outputs

mod model;
mod observer;
mod problem;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problem::CostProblem;
