use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

/// Errors that can occur during the quadratic line search.
#[derive(Debug, Error)]
pub enum Error {
    /// The bounds do not form a bracket.
    #[error("invalid bracket: lower bound {lower} must be finite and below upper bound {upper}")]
    InvalidBracket { lower: f64, upper: f64 },

    /// The initial estimate is not strictly inside the bounds.
    #[error("initial estimate {estimate} must lie strictly inside ({lower}, {upper})")]
    EstimateOutsideBracket {
        estimate: f64,
        lower: f64,
        upper: f64,
    },

    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    /// Input construction or cost computation failed.
    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
