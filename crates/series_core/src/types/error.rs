//! Series evaluation error types.

use thiserror::Error;

/// Result alias for series evaluation.
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Errors raised by the series core.
///
/// Non-convergence is not represented here unless the caller opts in to a
/// term cap through [`ConvergenceConfig::with_max_terms`]; without one the
/// driver keeps stepping until the stopping rule fires.
///
/// [`ConvergenceConfig::with_max_terms`]: crate::solvers::ConvergenceConfig::with_max_terms
///
/// # Examples
/// ```
/// use series_core::types::SeriesError;
///
/// let err = SeriesError::InvalidTermCount(0);
/// assert_eq!(format!("{}", err), "Invalid term count: 0 (at least one term is required)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Tolerance is not a finite positive number
    #[error("Invalid tolerance: {0} (must be finite and positive)")]
    InvalidTolerance(f64),

    /// Term-count-driven evaluation requested with no terms
    #[error("Invalid term count: {0} (at least one term is required)")]
    InvalidTermCount(usize),

    /// Caller-imposed term cap reached before the stopping rule fired
    #[error("Failed to converge after {terms} terms (last delta: {last_delta:e})")]
    ConvergenceFailure { terms: usize, last_delta: f64 },

    /// Series name did not match any known series
    #[error("Unknown series: {0}")]
    UnknownSeries(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tolerance_display() {
        let err = SeriesError::InvalidTolerance(-1.0);
        assert_eq!(
            format!("{}", err),
            "Invalid tolerance: -1 (must be finite and positive)"
        );
    }

    #[test]
    fn test_convergence_failure_display() {
        let err = SeriesError::ConvergenceFailure {
            terms: 10,
            last_delta: 0.5,
        };
        assert_eq!(
            format!("{}", err),
            "Failed to converge after 10 terms (last delta: 5e-1)"
        );
    }

    #[test]
    fn test_unknown_series_display() {
        let err = SeriesError::UnknownSeries("wallis".to_string());
        assert_eq!(format!("{}", err), "Unknown series: wallis");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SeriesError::InvalidTermCount(0);
        let _: &dyn std::error::Error = &err;
    }
}
