use thiserror::Error;

/// Policy for an interpolated candidate that escapes the current bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapePolicy {
    /// Terminate with [`Status::OutsideBounds`](super::Status::OutsideBounds).
    #[default]
    Fail,

    /// Shift the bracket to include the candidate and keep searching.
    ///
    /// The cost must tolerate evaluation outside the original bounds, and
    /// there is no guarantee the widened search converges.
    Expand,
}

/// Configuration for the quadratic line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    value_tol: Option<f64>,
    function_tol: f64,
    initial_estimate: Option<f64>,
    escape: EscapePolicy,
}

/// Errors that can occur when validating a quadratic line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("value_tol must be finite and positive")]
    ValueTol,

    #[error("function_tol must be finite and non-negative")]
    FunctionTol,

    #[error("initial_estimate must be finite")]
    InitialEstimate,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(50, None, 0.0).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// `value_tol` is the bracket-width convergence threshold; `None`
    /// resolves to 0.1 % of the initial bracket width at solve time.
    /// `function_tol` rescues an apparent non-convexity when the relative
    /// spread of the endpoint costs falls below it; `0.0` disables the
    /// rescue (the comparison is strict).
    ///
    /// # Errors
    ///
    /// Returns an error if `value_tol` is non-finite or non-positive, or if
    /// `function_tol` is non-finite or negative.
    pub fn new(
        max_iters: usize,
        value_tol: Option<f64>,
        function_tol: f64,
    ) -> Result<Self, ConfigError> {
        if let Some(tol) = value_tol
            && !(tol.is_finite() && tol > 0.0)
        {
            return Err(ConfigError::ValueTol);
        }
        if !function_tol.is_finite() || function_tol < 0.0 {
            return Err(ConfigError::FunctionTol);
        }

        Ok(Self {
            max_iters,
            value_tol,
            function_tol,
            initial_estimate: None,
            escape: EscapePolicy::default(),
        })
    }

    /// Sets the initial midpoint estimate.
    ///
    /// Defaults to the center of the bounds. Must lie strictly inside the
    /// bounds; that is checked at solve time, when the bounds are known.
    ///
    /// # Errors
    ///
    /// Returns an error if `estimate` is not finite.
    pub fn with_initial_estimate(mut self, estimate: f64) -> Result<Self, ConfigError> {
        if !estimate.is_finite() {
            return Err(ConfigError::InitialEstimate);
        }
        self.initial_estimate = Some(estimate);
        Ok(self)
    }

    /// Sets the policy for candidates that escape the bracket.
    #[must_use]
    pub fn with_escape_policy(mut self, escape: EscapePolicy) -> Self {
        self.escape = escape;
        self
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the configured bracket-width tolerance, if any.
    #[must_use]
    pub fn value_tol(&self) -> Option<f64> {
        self.value_tol
    }

    /// Returns the relative-flatness threshold for the non-convexity rescue.
    #[must_use]
    pub fn function_tol(&self) -> f64 {
        self.function_tol
    }

    /// Returns the initial midpoint estimate, if any.
    #[must_use]
    pub fn initial_estimate(&self) -> Option<f64> {
        self.initial_estimate
    }

    /// Returns the escape policy.
    #[must_use]
    pub fn escape(&self) -> EscapePolicy {
        self.escape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();

        assert_eq!(config.max_iters(), 50);
        assert_eq!(config.value_tol(), None);
        assert_eq!(config.function_tol(), 0.0);
        assert_eq!(config.initial_estimate(), None);
        assert_eq!(config.escape(), EscapePolicy::Fail);
    }

    #[test]
    fn rejects_bad_value_tol() {
        assert_eq!(Config::new(50, Some(0.0), 0.0), Err(ConfigError::ValueTol));
        assert_eq!(Config::new(50, Some(-1.0), 0.0), Err(ConfigError::ValueTol));
        assert_eq!(
            Config::new(50, Some(f64::NAN), 0.0),
            Err(ConfigError::ValueTol)
        );
    }

    #[test]
    fn rejects_bad_function_tol() {
        assert_eq!(Config::new(50, None, -0.1), Err(ConfigError::FunctionTol));
        assert_eq!(
            Config::new(50, None, f64::INFINITY),
            Err(ConfigError::FunctionTol)
        );
    }

    #[test]
    fn rejects_non_finite_estimate() {
        let result = Config::default().with_initial_estimate(f64::NAN);
        assert_eq!(result, Err(ConfigError::InitialEstimate));
    }

    #[test]
    fn fluent_setters_apply() {
        let config = Config::new(10, Some(0.5), 0.01)
            .unwrap()
            .with_initial_estimate(1.5)
            .unwrap()
            .with_escape_policy(EscapePolicy::Expand);

        assert_eq!(config.max_iters(), 10);
        assert_eq!(config.value_tol(), Some(0.5));
        assert_eq!(config.initial_estimate(), Some(1.5));
        assert_eq!(config.escape(), EscapePolicy::Expand);
    }
}
