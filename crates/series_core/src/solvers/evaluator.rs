//! Term-count-driven evaluation, used to cross-check the convergence driver.
//!
//! Given the term count `N` a convergence run consumed, [`sum_first_n`]
//! recomputes the series from scratch over exactly `N` terms. The sum is a
//! left-to-right reduction over `0..N` rather than call-stack recursion, so
//! its depth cost is constant while its addition order matches the
//! driver's accumulation term for term.

use serde::Serialize;
use tracing::info;

use super::depth_guard::DepthGuard;
use crate::traits::Series;
use crate::types::{Result, SeriesError};

/// Result of the guarded cross-check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecursiveOutcome {
    /// Evaluator ran over `term_count` terms
    Computed { estimate: f64, term_count: usize },
    /// Term count exceeded the guard; evaluator was not invoked
    Skipped { term_count: usize, limit: usize },
}

impl RecursiveOutcome {
    /// Estimate if the evaluator ran.
    pub fn estimate(&self) -> Option<f64> {
        match self {
            RecursiveOutcome::Computed { estimate, .. } => Some(*estimate),
            RecursiveOutcome::Skipped { .. } => None,
        }
    }

    /// Whether the depth guard rejected the term count.
    pub fn is_skipped(&self) -> bool {
        matches!(self, RecursiveOutcome::Skipped { .. })
    }
}

/// π estimate from the first `n` terms of `series`.
///
/// # Errors
/// `SeriesError::InvalidTermCount` if `n == 0`.
///
/// # Examples
/// ```
/// use series_core::series::Leibniz;
/// use series_core::solvers::sum_first_n;
///
/// assert_eq!(sum_first_n(&Leibniz, 1).unwrap(), 4.0);
/// assert!(sum_first_n(&Leibniz, 0).is_err());
/// ```
pub fn sum_first_n<S: Series>(series: &S, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(SeriesError::InvalidTermCount(n));
    }
    Ok(series.sum_terms(n))
}

/// Re-evaluate `series` over `n` terms unless `guard` rejects `n`.
pub fn verify<S: Series>(series: &S, n: usize, guard: &DepthGuard) -> Result<RecursiveOutcome> {
    match guard.guarded(n, |n| sum_first_n(series, n)) {
        Some(estimate) => Ok(RecursiveOutcome::Computed {
            estimate: estimate?,
            term_count: n,
        }),
        None => {
            info!(
                series = series.name(),
                terms = n,
                limit = guard.limit(),
                "term count exceeds depth limit, skipping recursive evaluation"
            );
            Ok(RecursiveOutcome::Skipped {
                term_count: n,
                limit: guard.limit(),
            })
        }
    }
}
