//! serieslab CLI
//!
//! Approximates π with the Leibniz, Nilakantha and Machin series, each
//! converged iteratively and cross-checked by a fixed-length evaluation.

mod commands;
mod error;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use infra_config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use error::{CliError, Result};

#[derive(Parser)]
#[command(name = "serieslab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Approximate π with classical infinite series", long_about = None)]
struct Cli {
    /// Extra configuration file layered over config/ and the environment
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Converge each series and cross-check it with a fixed-length sum
    Run(commands::run::RunArgs),

    /// Show resolved settings and available series
    Check,
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&settings.logging.level);

    let result = match &cli.command {
        Commands::Run(args) => commands::run::run(&settings, args),
        Commands::Check => commands::check::run(&settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use commands::run::OutputFormat;
    use series_core::series::SeriesKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_arguments() {
        let cli = Cli::parse_from([
            "serieslab", "run", "1e-8", "--series", "machin", "-s", "Leibniz", "--format", "json",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.tolerance.as_deref(), Some("1e-8"));
        assert_eq!(args.series, vec![SeriesKind::Machin, SeriesKind::Leibniz]);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_negative_tolerance_passes_through() {
        let cli = Cli::parse_from(["serieslab", "run", "-0.5"]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.tolerance.as_deref(), Some("-0.5"));
    }

    #[test]
    fn test_parse_unknown_series_rejected() {
        assert!(Cli::try_parse_from(["serieslab", "run", "--series", "wallis"]).is_err());
    }
}
