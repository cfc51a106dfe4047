use std::mem;

use crate::optimization::Evaluation;

use super::{Bracket, Point, Solution, solution::Status};

/// Owns the three bracket evaluations for one solver invocation.
///
/// Created by `init`, mutated only by the search loop, and consumed by
/// [`State::into_solution`]. The five update methods correspond to the five
/// placements an interpolated candidate can land in; each preserves the
/// `lower.x < mid.x < upper.x` ordering (except when an expansion receives
/// a candidate equal to the bound it replaces, which collapses a side and
/// surfaces as a degenerate candidate on the next iteration).
pub(super) struct State<I, O> {
    lower: Evaluation<I, O, 1>,
    mid: Evaluation<I, O, 1>,
    upper: Evaluation<I, O, 1>,
}

impl<I, O> State<I, O> {
    pub(super) fn new(
        lower: Evaluation<I, O, 1>,
        mid: Evaluation<I, O, 1>,
        upper: Evaluation<I, O, 1>,
    ) -> Self {
        Self { lower, mid, upper }
    }

    /// Returns the current bracket positions and costs.
    pub(super) fn bracket(&self) -> Bracket {
        Bracket::new(
            Point::from(&self.lower),
            Point::from(&self.mid),
            Point::from(&self.upper),
        )
    }

    pub(super) fn is_converged(&self, value_tol: f64) -> bool {
        self.bracket().width() < value_tol
    }

    /// Expands the bracket below the lower bound: `u←m, m←l, l←n`.
    pub(super) fn expand_down(&mut self, eval: Evaluation<I, O, 1>) {
        self.upper = mem::replace(&mut self.mid, mem::replace(&mut self.lower, eval));
    }

    /// Expands the bracket above the upper bound: `l←m, m←u, u←n`.
    pub(super) fn expand_up(&mut self, eval: Evaluation<I, O, 1>) {
        self.lower = mem::replace(&mut self.mid, mem::replace(&mut self.upper, eval));
    }

    /// Narrows within `[lower, mid)`: discard the left segment if the
    /// candidate is worse than the midpoint, otherwise make it the new
    /// midpoint and pull the upper bound in.
    pub(super) fn narrow_lower_half(&mut self, eval: Evaluation<I, O, 1>, worse: bool) {
        if worse {
            self.lower = eval;
        } else {
            self.upper = mem::replace(&mut self.mid, eval);
        }
    }

    /// Narrows within `(mid, upper)`: discard the right segment if the
    /// candidate is worse than the midpoint, otherwise make it the new
    /// midpoint and pull the lower bound in.
    pub(super) fn narrow_upper_half(&mut self, eval: Evaluation<I, O, 1>, worse: bool) {
        if worse {
            self.upper = eval;
        } else {
            self.lower = mem::replace(&mut self.mid, eval);
        }
    }

    /// Finalizes the run. Failure statuses report NaN for `x` and `cost`;
    /// the midpoint snapshot is kept either way.
    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        let (x, cost) = if status.is_failure() {
            (f64::NAN, f64::NAN)
        } else {
            (self.mid.x[0], self.mid.cost)
        };

        Solution {
            status,
            x,
            cost,
            snapshot: self.mid.snapshot,
            iters,
        }
    }
}
