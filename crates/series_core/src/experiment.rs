//! One series, both methods: converge iteratively, then cross-check.
//!
//! The driver's term count feeds the guarded evaluator, so each report
//! pairs an iterative estimate with either an independent recomputation
//! over the same terms or a skip marker.

use serde::Serialize;

use crate::series::{Leibniz, Machin, Nilakantha, SeriesKind};
use crate::solvers::{
    verify, Convergence, ConvergenceConfig, ConvergenceDriver, DepthGuard, RecursiveOutcome,
};
use crate::traits::Series;
use crate::types::Result;

/// Absolute distance from π.
#[inline]
pub fn absolute_error(estimate: f64) -> f64 {
    (estimate - std::f64::consts::PI).abs()
}

/// Both evaluations of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesReport {
    /// Which series was evaluated
    pub series: SeriesKind,
    /// Convergence-driven run
    pub iterative: Convergence,
    /// Fixed-length re-evaluation over the same term count
    pub recursive: RecursiveOutcome,
}

impl SeriesReport {
    /// `|recursive − iterative|`, if the recursive check ran.
    pub fn discrepancy(&self) -> Option<f64> {
        self.recursive
            .estimate()
            .map(|estimate| (estimate - self.iterative.estimate).abs())
    }
}

/// Converge `kind` under `config`, then re-evaluate its term count under `guard`.
///
/// # Examples
/// ```
/// use series_core::experiment::run_experiment;
/// use series_core::series::SeriesKind;
/// use series_core::solvers::{ConvergenceConfig, DepthGuard};
///
/// let config = ConvergenceConfig::new(1e-6).unwrap();
/// let report = run_experiment(SeriesKind::Machin, &config, &DepthGuard::default()).unwrap();
/// assert!(report.discrepancy().unwrap() < 1e-12);
/// ```
pub fn run_experiment(
    kind: SeriesKind,
    config: &ConvergenceConfig,
    guard: &DepthGuard,
) -> Result<SeriesReport> {
    match kind {
        SeriesKind::Leibniz => evaluate(kind, &Leibniz, config, guard),
        SeriesKind::Nilakantha => evaluate(kind, &Nilakantha, config, guard),
        SeriesKind::Machin => evaluate(kind, &Machin::new(), config, guard),
    }
}

/// Iterative phase only.
pub fn run_iterative(kind: SeriesKind, config: &ConvergenceConfig) -> Result<Convergence> {
    let driver = ConvergenceDriver::new(*config);
    match kind {
        SeriesKind::Leibniz => driver.run(&Leibniz),
        SeriesKind::Nilakantha => driver.run(&Nilakantha),
        SeriesKind::Machin => driver.run(&Machin::new()),
    }
}

/// Guarded recursive phase only.
pub fn run_recursive(
    kind: SeriesKind,
    n: usize,
    guard: &DepthGuard,
) -> Result<RecursiveOutcome> {
    match kind {
        SeriesKind::Leibniz => verify(&Leibniz, n, guard),
        SeriesKind::Nilakantha => verify(&Nilakantha, n, guard),
        SeriesKind::Machin => verify(&Machin::new(), n, guard),
    }
}

fn evaluate<S: Series>(
    kind: SeriesKind,
    series: &S,
    config: &ConvergenceConfig,
    guard: &DepthGuard,
) -> Result<SeriesReport> {
    let iterative = ConvergenceDriver::new(*config).run(series)?;
    let recursive = verify(series, iterative.term_count, guard)?;
    Ok(SeriesReport {
        series: kind,
        iterative,
        recursive,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConvergenceConfig {
        ConvergenceConfig::new(1e-6).unwrap()
    }

    #[test]
    fn test_nilakantha_report() {
        let report =
            run_experiment(SeriesKind::Nilakantha, &config(), &DepthGuard::default()).unwrap();
        assert_eq!(report.series, SeriesKind::Nilakantha);
        assert_eq!(report.iterative.term_count, 79);
        assert_eq!(report.discrepancy(), Some(0.0));
    }

    #[test]
    fn test_leibniz_skipped_by_default_guard() {
        let report =
            run_experiment(SeriesKind::Leibniz, &config(), &DepthGuard::default()).unwrap();
        assert!(report.recursive.is_skipped());
        assert_eq!(report.discrepancy(), None);
    }

    #[test]
    fn test_split_phases_match_combined() {
        let guard = DepthGuard::default();
        let combined = run_experiment(SeriesKind::Machin, &config(), &guard).unwrap();
        let iterative = run_iterative(SeriesKind::Machin, &config()).unwrap();
        let recursive = run_recursive(SeriesKind::Machin, iterative.term_count, &guard).unwrap();
        assert_eq!(combined.iterative, iterative);
        assert_eq!(combined.recursive, recursive);
    }

    #[test]
    fn test_absolute_error() {
        assert_eq!(absolute_error(std::f64::consts::PI), 0.0);
        assert!((absolute_error(3.0) - 0.14159265358979312).abs() < 1e-15);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use approx::assert_relative_eq;
        use proptest::prelude::*;

        // Log-uniform tolerance in [10^lo, 10^hi]
        fn tolerance_strategy(lo: f64, hi: f64) -> impl Strategy<Value = f64> {
            (lo..=hi).prop_map(|exponent| 10f64.powf(exponent))
        }

        fn unbounded() -> DepthGuard {
            DepthGuard::new(usize::MAX)
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_fast_series_recursive_agrees(tolerance in tolerance_strategy(-12.0, -4.0)) {
                let config = ConvergenceConfig::new(tolerance).unwrap();
                for kind in [SeriesKind::Nilakantha, SeriesKind::Machin] {
                    let report = run_experiment(kind, &config, &unbounded()).unwrap();
                    let recursive = report.recursive.estimate().unwrap();
                    assert_relative_eq!(recursive, report.iterative.estimate, max_relative = 1e-9);
                }
            }

            #[test]
            fn test_machin_faster_than_nilakantha(tolerance in tolerance_strategy(-12.0, -4.0)) {
                let config = ConvergenceConfig::new(tolerance).unwrap();
                let machin = run_iterative(SeriesKind::Machin, &config).unwrap();
                let nilakantha = run_iterative(SeriesKind::Nilakantha, &config).unwrap();
                prop_assert!(
                    machin.term_count < nilakantha.term_count,
                    "ε = {:e}: Machin {} vs Nilakantha {}",
                    tolerance, machin.term_count, nilakantha.term_count
                );
            }

            #[test]
            fn test_fast_series_error_scales_with_tolerance(
                tolerance in tolerance_strategy(-12.0, -4.0)
            ) {
                let config = ConvergenceConfig::new(tolerance).unwrap();
                for kind in [SeriesKind::Nilakantha, SeriesKind::Machin] {
                    let result = run_iterative(kind, &config).unwrap();
                    prop_assert!(absolute_error(result.estimate) < 10.0 * tolerance);
                }
            }
        }

        proptest! {
            // Leibniz needs ~2/ε terms, so keep ε ≥ 1e-7 and few cases
            #![proptest_config(ProptestConfig::with_cases(8))]

            #[test]
            fn test_leibniz_slowest_and_agrees(tolerance in tolerance_strategy(-7.0, -4.0)) {
                let config = ConvergenceConfig::new(tolerance).unwrap();
                let leibniz = run_experiment(SeriesKind::Leibniz, &config, &unbounded()).unwrap();
                let nilakantha = run_iterative(SeriesKind::Nilakantha, &config).unwrap();

                prop_assert!(nilakantha.term_count < leibniz.iterative.term_count);
                let recursive = leibniz.recursive.estimate().unwrap();
                assert_relative_eq!(recursive, leibniz.iterative.estimate, max_relative = 1e-9);
            }
        }
    }
}
