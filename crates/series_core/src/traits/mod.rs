//! Core traits for π series.
//!
//! This module defines the step interface shared by every series:
//! - Incremental estimation (`Series::step`)
//! - Fixed-length summation (`Series::sum_terms`)
//!
//! Concrete series are dispatched statically through
//! [`SeriesKind`](crate::series::SeriesKind) rather than `Box<dyn Series>`.

pub mod series;

pub use series::Series;
