//! Convergence driver configuration.

use serde::Serialize;

use crate::types::{Result, SeriesError};

/// Configuration for [`ConvergenceDriver`](super::ConvergenceDriver).
///
/// # Fields
/// - `tolerance`: stop once two consecutive estimates differ by less than this
/// - `max_terms`: optional caller-level safety bound, unbounded by default
///
/// # Examples
/// ```
/// use series_core::solvers::ConvergenceConfig;
///
/// let config = ConvergenceConfig::new(1e-6).unwrap();
/// assert_eq!(config.tolerance(), 1e-6);
/// assert_eq!(config.max_terms(), None);
///
/// assert!(ConvergenceConfig::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvergenceConfig {
    tolerance: f64,
    max_terms: Option<usize>,
}

impl ConvergenceConfig {
    /// Create a configuration with the given tolerance and no term cap.
    ///
    /// # Errors
    /// `SeriesError::InvalidTolerance` if `tolerance` is NaN, infinite or ≤ 0.
    pub fn new(tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(SeriesError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            tolerance,
            max_terms: None,
        })
    }

    /// Abort with `ConvergenceFailure` after `max_terms` terms.
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = Some(max_terms);
        self
    }

    /// Convergence threshold ε.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Optional term cap.
    pub fn max_terms(&self) -> Option<usize> {
        self.max_terms
    }
}
