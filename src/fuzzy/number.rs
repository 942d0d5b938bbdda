//! Triangular fuzzy numbers.
//!
//! A triangular fuzzy number `(a, m, b)` holds a pessimistic bound `a`, a
//! most-likely value `m` and an optimistic bound `b`. At confidence level
//! `alpha` each side of the triangle is interpolated independently:
//!
//! ```text
//! lower = a + alpha * (m - a)
//! upper = b + alpha * (m - b)
//! ```
//!
//! The ordering `a <= m <= b` is a convention, not an invariant. Unordered
//! triangles still produce finite cuts; only the monotonicity guarantees are
//! lost. Use [`FuzzyNumber::try_new`] to reject them up front.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyLpError, Result};

/// A triangular fuzzy number `(a, m, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyNumber {
    /// Pessimistic bound (support start).
    pub a: f64,
    /// Most-likely value (peak).
    pub m: f64,
    /// Optimistic bound (support end).
    pub b: f64,
}

impl FuzzyNumber {
    /// Create a fuzzy number without checking the ordering of its points.
    pub const fn new(a: f64, m: f64, b: f64) -> Self {
        FuzzyNumber { a, m, b }
    }

    /// Create a fuzzy number, rejecting unordered or non-finite points.
    pub fn try_new(a: f64, m: f64, b: f64) -> Result<Self> {
        let f = FuzzyNumber::new(a, m, b);
        if !f.is_finite() || !f.is_ordered() {
            return Err(FuzzyLpError::InvalidFuzzyNumber { a, m, b });
        }
        Ok(f)
    }

    /// A degenerate triangle whose cut is `value` at every level.
    pub const fn crisp_value(value: f64) -> Self {
        FuzzyNumber::new(value, value, value)
    }

    /// Check the triangle convention `a <= m <= b`.
    pub fn is_ordered(&self) -> bool {
        self.a <= self.m && self.m <= self.b
    }

    /// Check that all three points are finite.
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.m.is_finite() && self.b.is_finite()
    }

    /// Width of the support, `b - a`.
    pub fn spread(&self) -> f64 {
        self.b - self.a
    }

    /// Alpha-cut interval at level `alpha`.
    ///
    /// No domain check is performed: levels outside `[0, 1]` extrapolate
    /// linearly along each side.
    pub fn alpha_cut(&self, alpha: f64) -> AlphaCut {
        AlphaCut {
            lower: lerp(self.a, self.m, alpha),
            upper: lerp(self.b, self.m, alpha),
        }
    }

    /// Defuzzified value: midpoint of the alpha-cut.
    pub fn defuzzify(&self, alpha: f64) -> f64 {
        self.alpha_cut(alpha).midpoint()
    }
}

impl From<f64> for FuzzyNumber {
    fn from(value: f64) -> Self {
        FuzzyNumber::crisp_value(value)
    }
}

impl From<(f64, f64, f64)> for FuzzyNumber {
    fn from((a, m, b): (f64, f64, f64)) -> Self {
        FuzzyNumber::new(a, m, b)
    }
}

impl fmt::Display for FuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.m, self.b)
    }
}

/// Interpolate from `from` (alpha = 0) to `to` (alpha = 1).
///
/// Written as a weighted sum so both endpoints are reproduced exactly.
fn lerp(from: f64, to: f64, alpha: f64) -> f64 {
    (1.0 - alpha) * from + alpha * to
}

/// A crisp interval `[lower, upper]` produced by an alpha-cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaCut {
    /// Left side of the cut.
    pub lower: f64,
    /// Right side of the cut.
    pub upper: f64,
}

impl AlphaCut {
    /// Midpoint of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Interval width, `upper - lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check whether `x` lies within the interval (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

impl From<AlphaCut> for (f64, f64) {
    fn from(cut: AlphaCut) -> Self {
        (cut.lower, cut.upper)
    }
}

/// Compute the alpha-cut of `f` as a `(lower, upper)` pair.
pub fn alpha_cut(f: &FuzzyNumber, alpha: f64) -> (f64, f64) {
    f.alpha_cut(alpha).into()
}

/// Defuzzify `f` at level `alpha` (midpoint of its alpha-cut).
pub fn crisp(f: &FuzzyNumber, alpha: f64) -> f64 {
    f.defuzzify(alpha)
}
