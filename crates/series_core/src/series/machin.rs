//! Machin's formula: π = 16·arctan(1/5) − 4·arctan(1/239).
//!
//! Each arctangent is expanded as the Taylor series
//! `arctan(x) = Σ (-1)^k x^(2k+1) / (2k+1)`. Stepping carries the odd power
//! of `x` forward incrementally; fixed-length sums evaluate each term
//! directly from its index.

use crate::traits::Series;

/// One weighted arctangent in a Machin-like formula: `weight · arctan(base)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArctanTerm {
    /// Argument of the arctangent
    pub base: f64,
    /// Multiplier applied to the arctangent sum
    pub weight: f64,
}

impl ArctanTerm {
    /// Accumulator seeded with `power = base`, `sign = +1`, `sum = 0`.
    pub fn seed(&self) -> ArctanPartial {
        ArctanPartial {
            sum: 0.0,
            power: self.base,
            sign: 1.0,
        }
    }

    /// Taylor term `(-1)^k base^(2k+1) / (2k+1)`, evaluated in closed form.
    #[inline]
    pub fn taylor_term(&self, k: usize) -> f64 {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        let exponent = i32::try_from(2 * k + 1).unwrap_or(i32::MAX);
        sign * self.base.powi(exponent) / (2.0 * k as f64 + 1.0)
    }

    /// Taylor partial sum of `arctan(base)` over terms `0..n`.
    ///
    /// Each term is computed directly from its index, independently of the
    /// incremental power carried by [`ArctanPartial::advance`].
    pub fn partial_sum(&self, n: usize) -> f64 {
        (0..n).fold(0.0, |acc, k| acc + self.taylor_term(k))
    }
}

/// Running state of one arctangent Taylor expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArctanPartial {
    /// Partial sum so far
    pub sum: f64,
    /// `base^(2k+1)` for the next term
    pub power: f64,
    /// Sign of the next term
    pub sign: f64,
}

impl ArctanPartial {
    /// Add term `k` and move power and sign on to term `k + 1`.
    #[inline]
    pub fn advance(&self, k: usize, base: f64) -> Self {
        let denominator = 2.0 * k as f64 + 1.0;
        Self {
            sum: self.sum + self.sign * self.power / denominator,
            power: self.power * (base * base),
            sign: -self.sign,
        }
    }
}

/// Accumulator for both arctangent expansions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachinState {
    /// Expansion of the outer term, `arctan(1/5)`
    pub outer: ArctanPartial,
    /// Expansion of the inner term, `arctan(1/239)`
    pub inner: ArctanPartial,
}

/// Machin's arctangent formula for π.
///
/// The two bases and weights are explicit parameters rather than constants
/// baked into the step, so other two-term Machin-like formulas can reuse
/// the same machinery through [`Machin::with_terms`].
///
/// # Examples
/// ```
/// use series_core::series::Machin;
/// use series_core::traits::Series;
///
/// let machin = Machin::new();
/// let estimate = machin.sum_terms(10);
/// assert!((estimate - std::f64::consts::PI).abs() < 1e-13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Machin {
    outer: ArctanTerm,
    inner: ArctanTerm,
}

impl Machin {
    /// Machin's original 1706 formula.
    pub fn new() -> Self {
        Self::with_terms(
            ArctanTerm {
                base: 1.0 / 5.0,
                weight: 16.0,
            },
            ArctanTerm {
                base: 1.0 / 239.0,
                weight: 4.0,
            },
        )
    }

    /// `outer.weight · arctan(outer.base) − inner.weight · arctan(inner.base)`.
    pub fn with_terms(outer: ArctanTerm, inner: ArctanTerm) -> Self {
        Self { outer, inner }
    }

    /// The additive arctangent term.
    pub fn outer(&self) -> ArctanTerm {
        self.outer
    }

    /// The subtracted arctangent term.
    pub fn inner(&self) -> ArctanTerm {
        self.inner
    }

    #[inline]
    fn combine(&self, outer_sum: f64, inner_sum: f64) -> f64 {
        self.outer.weight * outer_sum - self.inner.weight * inner_sum
    }
}

impl Default for Machin {
    fn default() -> Self {
        Self::new()
    }
}

impl Series for Machin {
    type State = MachinState;

    fn name(&self) -> &'static str {
        "Machin"
    }

    fn initial_state(&self) -> MachinState {
        MachinState {
            outer: self.outer.seed(),
            inner: self.inner.seed(),
        }
    }

    fn step(&self, k: usize, state: &MachinState) -> (f64, MachinState) {
        let next = MachinState {
            outer: state.outer.advance(k, self.outer.base),
            inner: state.inner.advance(k, self.inner.base),
        };
        (self.combine(next.outer.sum, next.inner.sum), next)
    }

    fn sum_terms(&self, n: usize) -> f64 {
        self.combine(self.outer.partial_sum(n), self.inner.partial_sum(n))
    }
}
