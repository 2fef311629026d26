//! # infra_config
//!
//! Settings loading for serieslab.
//!
//! This crate loads runtime settings (TOML files and environment variables)
//! and resolves the convergence tolerance handed to the series core. It owns
//! the named default tolerance so the core never holds one implicitly.
//!
//! ## Architecture Position
//!
//! Part of the **infra** layer. Must not depend on `series_core`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use infra_config::Settings;
//!
//! let settings = Settings::load(None)?;
//! let tolerance = settings.experiment.resolve_tolerance(Some("1e-8"));
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{ExperimentConfig, LoggingConfig, Settings, DEFAULT_TOLERANCE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ConfigError, ExperimentConfig, LoggingConfig, Settings, DEFAULT_TOLERANCE};
}
