//! Numerical solvers for the plumb framework.
//!
//! Solvers consume a [`Model`] through a problem trait that adapts solver
//! variables to model inputs, and report progress through an [`Observer`].
//!
//! # Modules
//!
//! - [`optimization`] — cost minimization, currently the [`quadratic`] line
//!   search for convex scalar costs on a bracketed interval
//!
//! [`Model`]: plumb_core::Model
//! [`Observer`]: plumb_core::Observer
//! [`quadratic`]: optimization::quadratic

pub mod optimization;
