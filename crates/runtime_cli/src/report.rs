//! Report rendering for run results.

use std::io::Write;

use serde::Serialize;
use series_core::experiment::{absolute_error, SeriesReport};
use series_core::solvers::RecursiveOutcome;

use crate::Result;

/// One series' report with wall-clock time per phase.
#[derive(Debug, Clone, Serialize)]
pub struct TimedReport {
    #[serde(flatten)]
    pub report: SeriesReport,
    pub iterative_secs: f64,
    pub recursive_secs: f64,
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tolerance: f64,
    pub recursion_limit: usize,
    pub results: Vec<TimedReport>,
}

/// Render `summary` as an aligned table.
pub fn render_table<W: Write>(out: &mut W, summary: &RunSummary) -> Result<()> {
    writeln!(
        out,
        "π series (tolerance {:e}, recursion limit {})",
        summary.tolerance, summary.recursion_limit
    )?;
    writeln!(
        out,
        "{:<12} {:<10} {:>10} {:>20} {:>12} {:>12}",
        "Series", "Method", "Terms", "Estimate", "|Error|", "Time"
    )?;

    for timed in &summary.results {
        let report = &timed.report;
        let iterative = &report.iterative;
        writeln!(
            out,
            "{:<12} {:<10} {:>10} {:>20.15} {:>12.3e} {:>12}",
            report.series.name(),
            "iterative",
            iterative.term_count,
            iterative.estimate,
            absolute_error(iterative.estimate),
            format_duration(timed.iterative_secs)
        )?;

        match report.recursive {
            RecursiveOutcome::Computed {
                estimate,
                term_count,
            } => writeln!(
                out,
                "{:<12} {:<10} {:>10} {:>20.15} {:>12.3e} {:>12}",
                report.series.name(),
                "recursive",
                term_count,
                estimate,
                absolute_error(estimate),
                format_duration(timed.recursive_secs)
            )?,
            RecursiveOutcome::Skipped { term_count, limit } => writeln!(
                out,
                "{:<12} {:<10} skipped ({} terms exceeds limit {})",
                report.series.name(),
                "recursive",
                term_count,
                limit
            )?,
        }
    }

    Ok(())
}

/// Render `summary` as pretty-printed JSON.
pub fn render_json<W: Write>(out: &mut W, summary: &RunSummary) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

/// Human-scale duration: µs below a millisecond, ms below a second.
pub fn format_duration(secs: f64) -> String {
    if secs < 1e-3 {
        format!("{:.1}µs", secs * 1e6)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1e3)
    } else {
        format!("{:.3}s", secs)
    }
}
