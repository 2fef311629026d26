//! Nilakantha series: π = 3 + 4/(2·3·4) − 4/(4·5·6) + 4/(6·7·8) − …

use super::RunningSum;
use crate::traits::Series;

/// Signed term for 0-based index `k`.
///
/// The series is conventionally indexed from 1, so `k` maps to `j = k + 1`,
/// `a = 2j`, and the term is `±4 / (a(a+1)(a+2))` with `+` for odd `j`.
#[inline]
pub fn nilakantha_term(k: usize) -> f64 {
    let j = k + 1;
    let a = 2.0 * j as f64;
    let sign = if j % 2 == 1 { 1.0 } else { -1.0 };
    sign * 4.0 / (a * (a + 1.0) * (a + 2.0))
}

/// The Nilakantha series for π.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nilakantha;

impl Series for Nilakantha {
    type State = RunningSum;

    fn name(&self) -> &'static str {
        "Nilakantha"
    }

    fn initial_state(&self) -> RunningSum {
        RunningSum::default()
    }

    fn step(&self, k: usize, state: &RunningSum) -> (f64, RunningSum) {
        let next = state.add(nilakantha_term(k));
        (3.0 + next.sum, next)
    }

    fn sum_terms(&self, n: usize) -> f64 {
        let sum = (0..n).fold(0.0, |acc, k| acc + nilakantha_term(k));
        3.0 + sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_terms() {
        assert_relative_eq!(nilakantha_term(0), 4.0 / 24.0);
        assert_relative_eq!(nilakantha_term(1), -4.0 / 120.0);
        assert_relative_eq!(nilakantha_term(2), 4.0 / 336.0);
    }

    #[test]
    fn test_single_term_estimate() {
        let (estimate, _) = Nilakantha.step(0, &Nilakantha.initial_state());
        assert_relative_eq!(estimate, 3.0 + 1.0 / 6.0, epsilon = 1e-15);
        assert_eq!(estimate, Nilakantha.sum_terms(1));
    }

    #[test]
    fn test_estimates_bracket_pi() {
        // Alternating series: partial sums straddle the limit
        let mut state = Nilakantha.initial_state();
        for k in 0..20 {
            let (estimate, next) = Nilakantha.step(k, &state);
            if k % 2 == 0 {
                assert!(estimate > std::f64::consts::PI);
            } else {
                assert!(estimate < std::f64::consts::PI);
            }
            state = next;
        }
    }
}
