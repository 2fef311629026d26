//! Convergence-driven evaluation of a series.

use serde::Serialize;
use tracing::{debug, trace};

use super::config::ConvergenceConfig;
use crate::traits::Series;
use crate::types::{Result, SeriesError};

/// Outcome of a convergence run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Convergence {
    /// Estimate after the final term
    pub estimate: f64,
    /// Number of terms consumed, including the one that satisfied the rule
    pub term_count: usize,
    /// `|estimate − previous estimate|` at termination
    pub last_delta: f64,
}

/// Steps a series until two consecutive estimates agree within tolerance.
///
/// # Algorithm
///
/// Starting at `k = 0` from the series' initial state, each step yields a
/// new estimate. The run stops at the first `k ≥ 1` with
/// `|estimate_k − estimate_{k−1}| < ε` and reports `k + 1` terms.
///
/// The rule compares successive estimates, not the estimate against π, so
/// the reported accuracy depends on how the series oscillates.
///
/// Without a term cap the loop has no exit other than the stopping rule.
/// Every built-in series converges for ε > 0.
///
/// # Examples
/// ```
/// use series_core::series::Machin;
/// use series_core::solvers::{ConvergenceConfig, ConvergenceDriver};
///
/// let driver = ConvergenceDriver::new(ConvergenceConfig::new(1e-6).unwrap());
/// let result = driver.run(&Machin::new()).unwrap();
/// assert!(result.term_count < 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConvergenceDriver {
    config: ConvergenceConfig,
}

impl ConvergenceDriver {
    /// Create a driver with the given configuration.
    pub fn new(config: ConvergenceConfig) -> Self {
        Self { config }
    }

    /// Run `series` to convergence.
    ///
    /// # Errors
    /// `SeriesError::ConvergenceFailure` only when a term cap is configured
    /// and reached first.
    pub fn run<S: Series>(&self, series: &S) -> Result<Convergence> {
        let tolerance = self.config.tolerance();
        let mut state = series.initial_state();
        let mut previous: Option<f64> = None;
        let mut last_delta = f64::INFINITY;
        let mut k = 0usize;

        loop {
            if let Some(max_terms) = self.config.max_terms() {
                if k >= max_terms {
                    return Err(SeriesError::ConvergenceFailure {
                        terms: k,
                        last_delta,
                    });
                }
            }

            let (estimate, next) = series.step(k, &state);
            trace!(series = series.name(), k, estimate, "series step");

            if let Some(prev) = previous {
                last_delta = (estimate - prev).abs();
                if last_delta < tolerance {
                    let result = Convergence {
                        estimate,
                        term_count: k + 1,
                        last_delta,
                    };
                    debug!(
                        series = series.name(),
                        tolerance,
                        terms = result.term_count,
                        estimate,
                        "series converged"
                    );
                    return Ok(result);
                }
            }

            previous = Some(estimate);
            state = next;
            k += 1;
        }
    }
}
