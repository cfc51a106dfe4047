/// A callable that maps a typed input to a typed output.
///
/// A model is the thing being evaluated during a solve: solvers never see
/// its input or output types directly, only through a problem trait that
/// adapts solver variables to them.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model for the given input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the model cannot produce an output.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a single model call.
///
/// Solutions carry a snapshot so callers can inspect the model state at the
/// reported point without re-evaluating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a snapshot from an input/output pair.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
