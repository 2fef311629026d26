//! Drivers that turn a [`Series`](crate::traits::Series) into a π estimate.
//!
//! ## Available Drivers
//!
//! - [`ConvergenceDriver`]: steps until consecutive estimates agree within ε
//! - [`sum_first_n`]: recomputes a fixed number of terms independently
//! - [`DepthGuard`]: decides whether a term count may be re-evaluated
//!
//! ## Configuration
//!
//! [`ConvergenceConfig`] carries:
//! - `tolerance`: convergence threshold, validated to be finite and positive
//! - `max_terms`: optional safety bound, unbounded unless set
//!
//! ## Example
//!
//! ```
//! use series_core::series::Nilakantha;
//! use series_core::solvers::{sum_first_n, ConvergenceConfig, ConvergenceDriver};
//!
//! let driver = ConvergenceDriver::new(ConvergenceConfig::new(1e-6).unwrap());
//! let result = driver.run(&Nilakantha).unwrap();
//!
//! let check = sum_first_n(&Nilakantha, result.term_count).unwrap();
//! assert_eq!(check, result.estimate);
//! ```

mod config;
mod convergence;
mod depth_guard;
mod evaluator;

pub use config::ConvergenceConfig;
pub use convergence::{Convergence, ConvergenceDriver};
pub use depth_guard::{DepthGuard, MAX_RECURSION_DEPTH};
pub use evaluator::{sum_first_n, verify, RecursiveOutcome};
