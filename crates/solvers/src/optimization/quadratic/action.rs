/// Actions an observer can take during the quadratic line search.
///
/// Unlike comparison-only searches, this solver feeds cost values into its
/// interpolation arithmetic, so there is no action for substituting a
/// synthetic cost. The only control an observer has is to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current midpoint.
    StopEarly,
}
