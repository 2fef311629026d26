//! Run command implementation
//!
//! Converges each selected series, re-evaluates its term count under the
//! depth guard and times both phases.

use std::io::{self, Write};
use std::time::Instant;

use clap::{Args, ValueEnum};
use infra_config::Settings;
use series_core::experiment::{run_iterative, run_recursive, SeriesReport};
use series_core::series::SeriesKind;
use series_core::solvers::{ConvergenceConfig, DepthGuard};
use tracing::info;

use crate::report::{render_json, render_table, RunSummary, TimedReport};
use crate::{CliError, Result};

/// Output format for run results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Convergence tolerance; falls back to the configured default if absent or invalid
    #[arg(allow_negative_numbers = true)]
    pub tolerance: Option<String>,

    /// Series to run (repeatable); defaults to all
    #[arg(short, long = "series", value_name = "NAME")]
    pub series: Vec<SeriesKind>,

    /// Largest term count re-evaluated by the recursive check
    #[arg(long)]
    pub recursion_limit: Option<usize>,

    /// Abort a convergence run after this many terms
    #[arg(long)]
    pub max_terms: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Run the run command
pub fn run(settings: &Settings, args: &RunArgs) -> Result<()> {
    let summary = execute(settings, args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => render_table(&mut out, &summary)?,
        OutputFormat::Json => render_json(&mut out, &summary)?,
    }
    out.flush()?;

    Ok(())
}

/// Resolve inputs and evaluate every selected series.
pub fn execute(settings: &Settings, args: &RunArgs) -> Result<RunSummary> {
    let experiment = &settings.experiment;
    let tolerance = experiment.resolve_tolerance(args.tolerance.as_deref());

    let max_terms = at_least_one("--max-terms", args.max_terms.or(experiment.max_terms))?;
    let recursion_limit = at_least_one(
        "--recursion-limit",
        args.recursion_limit.or(experiment.recursion_limit),
    )?;

    let mut config = ConvergenceConfig::new(tolerance)?;
    if let Some(max_terms) = max_terms {
        config = config.with_max_terms(max_terms);
    }

    let guard = recursion_limit.map(DepthGuard::new).unwrap_or_default();

    let kinds = if args.series.is_empty() {
        SeriesKind::ALL.to_vec()
    } else {
        args.series.clone()
    };

    info!(
        tolerance,
        limit = guard.limit(),
        series = kinds.len(),
        "running experiments"
    );

    let results = kinds
        .into_iter()
        .map(|kind| measure(kind, &config, &guard))
        .collect::<Result<Vec<_>>>()?;

    Ok(RunSummary {
        tolerance,
        recursion_limit: guard.limit(),
        results,
    })
}

fn at_least_one(flag: &str, value: Option<usize>) -> Result<Option<usize>> {
    match value {
        Some(0) => Err(CliError::InvalidArgument(format!("{} must be at least 1", flag))),
        other => Ok(other),
    }
}

fn measure(
    kind: SeriesKind,
    config: &ConvergenceConfig,
    guard: &DepthGuard,
) -> Result<TimedReport> {
    let start = Instant::now();
    let iterative = run_iterative(kind, config)?;
    let iterative_secs = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let recursive = run_recursive(kind, iterative.term_count, guard)?;
    let recursive_secs = start.elapsed().as_secs_f64();

    Ok(TimedReport {
        report: SeriesReport {
            series: kind,
            iterative,
            recursive,
        },
        iterative_secs,
        recursive_secs,
    })
}
