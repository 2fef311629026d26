//! # series_core
//!
//! Convergence-driven and term-count-driven evaluation of classical π series.
//!
//! ## Architecture Position
//!
//! Part of the **core** layer. Pure computation: no I/O, no configuration
//! loading, no implicit defaults for tolerance. Callers resolve settings
//! and pass them in explicitly.
//!
//! ## Modules
//! - `series`: Leibniz, Nilakantha and Machin step functions plus [`SeriesKind`](series::SeriesKind)
//! - `solvers`: convergence driver, fixed-length evaluator and depth guard
//! - `experiment`: both methods run back to back for one series
//! - `traits`: the generic `Series` step interface
//! - `types`: error types
//!
//! ## Example
//!
//! ```
//! use series_core::prelude::*;
//!
//! let config = ConvergenceConfig::new(1e-6)?;
//! let guard = DepthGuard::default();
//!
//! for kind in SeriesKind::ALL {
//!     let report = run_experiment(kind, &config, &guard)?;
//!     assert!(absolute_error(report.iterative.estimate) < 1e-5);
//! }
//! # Ok::<(), series_core::types::SeriesError>(())
//! ```

pub mod experiment;
pub mod series;
pub mod solvers;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::experiment::{absolute_error, run_experiment, SeriesReport};
    pub use crate::series::{Leibniz, Machin, Nilakantha, SeriesKind};
    pub use crate::solvers::{
        sum_first_n, Convergence, ConvergenceConfig, ConvergenceDriver, DepthGuard,
        RecursiveOutcome,
    };
    pub use crate::traits::Series;
    pub use crate::types::SeriesError;
}
