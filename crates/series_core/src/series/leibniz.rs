//! Leibniz series: π/4 = 1 − 1/3 + 1/5 − 1/7 + …

use super::RunningSum;
use crate::traits::Series;

/// Signed term `(-1)^k / (2k+1)`.
#[inline]
pub fn leibniz_term(k: usize) -> f64 {
    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
    sign / (2.0 * k as f64 + 1.0)
}

/// The Leibniz series for π.
///
/// Converges sublinearly: consecutive estimates differ by `4 / (2k+1)`, so
/// a tolerance of ε needs roughly `2 / ε` terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Leibniz;

impl Series for Leibniz {
    type State = RunningSum;

    fn name(&self) -> &'static str {
        "Leibniz"
    }

    fn initial_state(&self) -> RunningSum {
        RunningSum::default()
    }

    fn step(&self, k: usize, state: &RunningSum) -> (f64, RunningSum) {
        let next = state.add(leibniz_term(k));
        (4.0 * next.sum, next)
    }

    fn sum_terms(&self, n: usize) -> f64 {
        let sum = (0..n).fold(0.0, |acc, k| acc + leibniz_term(k));
        4.0 * sum
    }
}
