//! Settings and configuration structures.

use std::path::Path;

use crate::error::ConfigError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Tolerance used when none is supplied or the supplied one is unusable.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Main application settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Experiment configuration
    #[serde(default)]
    pub experiment: ExperimentConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `SERIESLAB_ENV`)
    /// 3. Environment variables prefixed with `SERIESLAB__`
    /// 4. `explicit`, when given; it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("SERIESLAB_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("SERIESLAB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the experiment cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let experiment = &self.experiment;

        if !experiment.tolerance.is_finite() || experiment.tolerance <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "experiment.tolerance".into(),
                message: format!("must be finite and positive, got {}", experiment.tolerance),
            });
        }
        if experiment.recursion_limit == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "experiment.recursion_limit".into(),
                message: "must be at least 1".into(),
            });
        }
        if experiment.max_terms == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "experiment.max_terms".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Experiment configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Fallback convergence tolerance
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Largest term count re-evaluated by the recursive check (core default if unset)
    #[serde(default)]
    pub recursion_limit: Option<usize>,
    /// Safety bound on terms per convergence run (unbounded if unset)
    #[serde(default)]
    pub max_terms: Option<usize>,
}

impl ExperimentConfig {
    /// Resolve a user-supplied tolerance.
    ///
    /// Returns `raw` parsed as `f64` if it is finite and positive; otherwise
    /// logs a warning and falls back to the configured tolerance.
    pub fn resolve_tolerance(&self, raw: Option<&str>) -> f64 {
        let Some(raw) = raw else {
            return self.tolerance;
        };

        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => value,
            Ok(value) => {
                warn!(
                    value,
                    fallback = self.tolerance,
                    "tolerance must be finite and positive, using default"
                );
                self.tolerance
            }
            Err(e) => {
                warn!(
                    raw,
                    error = %e,
                    fallback = self.tolerance,
                    "unparseable tolerance, using default"
                );
                self.tolerance
            }
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            recursion_limit: None,
            max_terms: None,
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

/// Logging configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
