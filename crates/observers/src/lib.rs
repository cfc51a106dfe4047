//! Reusable observers for the plumb solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work across solvers.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for cross-solver observers
//!   ([`HasCost`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`] — logs every evaluation and the surrounding bracket
//!   through `tracing`, for inspecting a search iteration by iteration
//! - `ProgressObserver` — ticks an `indicatif` progress bar once per solver
//!   event; behind the `progress` feature, which adds the `indicatif`
//!   dependency
//!
//! [`Observer`]: plumb_core::Observer
//! [`HasCost`]: traits::HasCost
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trace;

pub use trace::TraceObserver;

#[cfg(feature = "progress")]
mod progress;

#[cfg(feature = "progress")]
pub use progress::ProgressObserver;
