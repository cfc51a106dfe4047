use plumb_core::Snapshot;

/// Classifies how a quadratic line search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket narrowed below the value tolerance (or the search hit a
    /// fixed point of the iteration); the midpoint is the minimizer
    /// estimate.
    Converged,

    /// The cost shape inside the bracket violates the convexity assumption
    /// and the bracket is not yet narrow enough to accept the midpoint.
    NonConvex,

    /// An interpolated candidate escaped the bracket and the escape policy
    /// is [`EscapePolicy::Fail`](super::EscapePolicy::Fail).
    OutsideBounds,

    /// The iteration budget was exhausted before convergence.
    MaxIters,

    /// Interpolation produced no usable candidate (colinear bracket points
    /// or a non-finite cost); the midpoint is returned as a conservative
    /// fallback. Treat as a soft signal to re-examine the cost function.
    Degenerate,

    /// Stopped early by an observer decision.
    StoppedByObserver,
}

impl Status {
    /// True for the classifications that report no usable estimate.
    ///
    /// [`Solution::x`] is NaN exactly when this returns true.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::NonConvex | Self::OutsideBounds | Self::MaxIters)
    }
}

/// The result of a quadratic line search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// The minimizer estimate, or NaN when
    /// [`status.is_failure()`](Status::is_failure).
    pub x: f64,

    /// Cost at the reported x, NaN when the status is a failure.
    pub cost: f64,

    /// Snapshot at the final bracket midpoint, kept for diagnosis even when
    /// the status is a failure.
    pub snapshot: Snapshot<I, O>,

    /// Iteration count when the solver finished.
    ///
    /// An iteration is counted once its interpolation work has begun, so
    /// exits from the checks that precede interpolation (convergence,
    /// convexity) report the count of the previous iteration.
    pub iters: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_statuses_are_exactly_the_nan_ones() {
        assert!(Status::NonConvex.is_failure());
        assert!(Status::OutsideBounds.is_failure());
        assert!(Status::MaxIters.is_failure());

        assert!(!Status::Converged.is_failure());
        assert!(!Status::Degenerate.is_failure());
        assert!(!Status::StoppedByObserver.is_failure());
    }
}
