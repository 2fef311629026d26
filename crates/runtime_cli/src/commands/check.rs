//! Check command implementation
//!
//! Prints the resolved settings and the available series.

use infra_config::Settings;
use series_core::series::{Machin, SeriesKind};
use series_core::solvers::MAX_RECURSION_DEPTH;
use tracing::info;

use crate::Result;

/// Run the check command
pub fn run(settings: &Settings) -> Result<()> {
    info!("Checking configuration...");

    let experiment = &settings.experiment;

    println!("serieslab Configuration Check");
    println!("=============================\n");

    println!("Experiment:");
    println!("  Default tolerance: {:e}", experiment.tolerance);
    match experiment.recursion_limit {
        Some(limit) => println!("  Recursion limit:   {}", limit),
        None => println!("  Recursion limit:   {} (built-in)", MAX_RECURSION_DEPTH),
    }
    match experiment.max_terms {
        Some(max_terms) => println!("  Term cap:          {}", max_terms),
        None => println!("  Term cap:          none"),
    }
    println!();

    println!("Logging:");
    println!("  Level: {}", settings.logging.level);
    println!();

    println!("Available Series:");
    for kind in SeriesKind::ALL {
        println!("  ✓ {}", kind);
    }
    let machin = Machin::new();
    let (outer, inner) = (machin.outer(), machin.inner());
    println!(
        "    Machin terms: {}·arctan({:.6}) − {}·arctan({:.6})",
        outer.weight, outer.base, inner.weight, inner.base
    );
    println!();

    println!("All checks passed!");

    Ok(())
}
