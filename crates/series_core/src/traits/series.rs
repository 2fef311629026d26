//! The generic step interface for π series.

/// A series whose partial sums converge to π.
///
/// # Contract
///
/// `step(k, state)` consumes term `k` (0-based) and returns the π estimate
/// after that term together with a brand-new state. The input state is
/// never mutated, so a run is fully determined by the sequence of indices
/// fed to it.
///
/// `sum_terms(n)` evaluates the same closed-form sum over terms `0..n`
/// independently of `step`. Both must add terms from low index to high so
/// that `sum_terms(n)` agrees with the estimate returned by the `n`-th step.
///
/// # Examples
/// ```
/// use series_core::series::Leibniz;
/// use series_core::traits::Series;
///
/// let series = Leibniz;
/// let (estimate, state) = series.step(0, &series.initial_state());
/// assert_eq!(estimate, 4.0);
///
/// let (estimate, _) = series.step(1, &state);
/// assert_eq!(estimate, series.sum_terms(2));
/// ```
pub trait Series {
    /// Per-run accumulator, owned exclusively by one evaluation.
    type State: Copy + std::fmt::Debug;

    /// Human-readable series name.
    fn name(&self) -> &'static str;

    /// Accumulator before any term has been consumed.
    fn initial_state(&self) -> Self::State;

    /// Consume term `k` and return `(estimate, new_state)`.
    fn step(&self, k: usize, state: &Self::State) -> (f64, Self::State);

    /// π estimate from exactly the first `n` terms.
    ///
    /// `n == 0` yields the series' additive identity mapped through its
    /// estimate transform; use
    /// [`sum_first_n`](crate::solvers::sum_first_n) for the checked entry
    /// point.
    fn sum_terms(&self, n: usize) -> f64;
}
