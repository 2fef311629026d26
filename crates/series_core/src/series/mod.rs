//! Classical infinite series for π.
//!
//! ## Available Series
//!
//! - [`Leibniz`]: `π/4 = Σ (-1)^k / (2k+1)`, sublinear convergence
//! - [`Nilakantha`]: `π = 3 + Σ ±4 / (2j(2j+1)(2j+2))`, cubic term decay
//! - [`Machin`]: `π = 16·arctan(1/5) − 4·arctan(1/239)`, geometric decay
//!
//! [`SeriesKind`] names them for selection and dispatches to each
//! implementation with a `match`.

mod leibniz;
mod machin;
mod nilakantha;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::types::SeriesError;

pub use leibniz::{leibniz_term, Leibniz};
pub use machin::{ArctanPartial, ArctanTerm, Machin, MachinState};
pub use nilakantha::{nilakantha_term, Nilakantha};

/// Single running partial sum, the state of Leibniz and Nilakantha.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningSum {
    /// Sum of every term consumed so far
    pub sum: f64,
}

impl RunningSum {
    /// New accumulator with `term` added.
    #[inline]
    pub fn add(&self, term: f64) -> Self {
        Self {
            sum: self.sum + term,
        }
    }
}

/// The series available to an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SeriesKind {
    /// Leibniz (Madhava–Leibniz) series
    Leibniz,
    /// Nilakantha series
    Nilakantha,
    /// Machin's arctangent formula
    Machin,
}

impl SeriesKind {
    /// Every series, slowest-converging first.
    pub const ALL: [SeriesKind; 3] = [
        SeriesKind::Leibniz,
        SeriesKind::Nilakantha,
        SeriesKind::Machin,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            SeriesKind::Leibniz => "Leibniz",
            SeriesKind::Nilakantha => "Nilakantha",
            SeriesKind::Machin => "Machin",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeriesKind {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leibniz" => Ok(SeriesKind::Leibniz),
            "nilakantha" => Ok(SeriesKind::Nilakantha),
            "machin" => Ok(SeriesKind::Machin),
            _ => Err(SeriesError::UnknownSeries(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Series;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Leibniz".parse::<SeriesKind>(), Ok(SeriesKind::Leibniz));
        assert_eq!(" NILAKANTHA ".parse::<SeriesKind>(), Ok(SeriesKind::Nilakantha));
        assert_eq!("machin".parse::<SeriesKind>(), Ok(SeriesKind::Machin));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "wallis".parse::<SeriesKind>(),
            Err(SeriesError::UnknownSeries("wallis".to_string()))
        );
    }

    #[test]
    fn test_names_match_implementations() {
        assert_eq!(SeriesKind::Leibniz.name(), Leibniz.name());
        assert_eq!(SeriesKind::Nilakantha.name(), Nilakantha.name());
        assert_eq!(SeriesKind::Machin.name(), Machin::new().name());
        assert_eq!(SeriesKind::Machin.to_string(), "Machin");
    }

    #[test]
    fn test_running_sum_add() {
        let sum = RunningSum::default().add(1.5).add(-0.5);
        assert_eq!(sum.sum, 1.0);
    }
}
