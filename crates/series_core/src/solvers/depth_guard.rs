//! Upper bound on term-count-driven re-evaluation.

use serde::Serialize;

/// Default cap on the term count handed to the evaluator.
pub const MAX_RECURSION_DEPTH: usize = 10_000;

/// Pure predicate deciding whether a term count may be re-evaluated.
///
/// # Examples
/// ```
/// use series_core::solvers::DepthGuard;
///
/// let guard = DepthGuard::new(5);
/// assert!(guard.within_limit(5));
/// assert!(!guard.within_limit(6));
/// assert_eq!(guard.guarded(100, |n| n * 2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepthGuard {
    limit: usize,
}

impl DepthGuard {
    /// Guard with a custom limit.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Largest accepted term count.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// `n ≤ limit`.
    #[inline]
    pub fn within_limit(&self, n: usize) -> bool {
        n <= self.limit
    }

    /// Call `f(n)` only if `n` is within the limit.
    pub fn guarded<T, F>(&self, n: usize, f: F) -> Option<T>
    where
        F: FnOnce(usize) -> T,
    {
        self.within_limit(n).then(|| f(n))
    }
}

impl Default for DepthGuard {
    fn default() -> Self {
        Self::new(MAX_RECURSION_DEPTH)
    }
}
