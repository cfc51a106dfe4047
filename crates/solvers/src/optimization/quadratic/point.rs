use crate::optimization::Evaluation;

/// A point with its evaluated cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The cost at x.
    pub cost: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, cost: f64) -> Self {
        Self { x, cost }
    }
}

impl<I, O> From<&Evaluation<I, O, 1>> for Point {
    fn from(eval: &Evaluation<I, O, 1>) -> Self {
        Self::new(eval.x[0], eval.cost)
    }
}
