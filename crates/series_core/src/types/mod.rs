//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for series evaluation

pub mod error;

pub use error::{Result, SeriesError};
