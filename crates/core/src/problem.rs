/// Defines a cost-minimization problem to be solved.
///
/// A cost problem maps solver variables to a model input, then computes a
/// scalar cost from the model input and output. Solvers search for the
/// variables that minimize the cost.
///
/// The const generic `N` is the number of solver variables. For example,
/// `N = 1` is a scalar problem, the form consumed by line searches.
pub trait CostProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes the cost from model input/output.
    ///
    /// Solvers search for the input that minimizes this value.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the cost cannot be computed.
    fn cost(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
