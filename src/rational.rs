// src/rational.rs
//
// Fixed-width rational number.
//
// Terms are stored exactly as given. Nothing reduces a value behind the
// caller's back: `2/4` stays `2/4` until `simplify` or `simplified` is called.

mod cmp;
mod decimal;
mod num;
mod ops;
mod parse;
mod rounding;


use crate::error::{RationalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use decimal::DECIMAL_SCALE;

/// A fraction of two signed 64-bit integers.
///
/// Equality and ordering compare the decimal values of both sides, so
/// `8/80 == 1/10` even though neither is reduced. See [`Rational::exact_cmp`]
/// for a comparison that does not go through `f64`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawRational")]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

#[derive(Deserialize)]
struct RawRational {
    numerator: i64,
    denominator: i64,
}

impl TryFrom<RawRational> for Rational {
    type Error = RationalError;

    fn try_from(raw: RawRational) -> Result<Self> {
        Rational::new(raw.numerator, raw.denominator)
    }
}

impl Rational {
    /// Creates `numerator/denominator` without reducing it.
    ///
    /// Fails with [`RationalError::InvalidDenominator`] when `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            tracing::debug!(numerator, "rejected rational with zero denominator");
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Rational { numerator, denominator })
    }

    /// Creates a rational without checking the denominator.
    ///
    /// **Converting or simplifying a value with a zero denominator panics or
    /// yields a non-finite decimal.**
    #[inline]
    pub const fn new_raw(numerator: i64, denominator: i64) -> Self {
        Rational { numerator, denominator }
    }

    /// `n/1`
    #[inline]
    pub const fn from_integer(n: i64) -> Self {
        Rational::new_raw(n, 1)
    }

    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// The stored terms as `(numerator, denominator)`.
    #[inline]
    pub const fn terms(&self) -> (i64, i64) {
        (self.numerator, self.denominator)
    }

    /// Greatest common divisor of the two terms.
    ///
    /// A zero numerator yields the denominator itself, so dividing through
    /// turns `0/k` into `0/1`. The sign of the result follows the truncating
    /// remainder and is not normalized.
    pub fn gcd_of_terms(&self) -> i64 {
        if self.numerator == 0 {
            return self.denominator;
        }
        gcd(self.denominator % self.numerator, self.numerator)
    }

    /// Reduces the terms in place.
    pub fn simplify(&mut self) {
        let g = self.gcd_of_terms();
        self.numerator /= g;
        self.denominator /= g;
    }

    /// Returns a reduced copy, leaving `self` untouched.
    pub fn simplified(&self) -> Self {
        let mut reduced = *self;
        reduced.simplify();
        reduced
    }

    pub fn simplified_terms(&self) -> (i64, i64) {
        self.simplified().terms()
    }
}

/// Euclid's algorithm over truncating remainders.
pub(crate) fn gcd(a: i64, b: i64) -> i64 {
    if a == 0 {
        b
    } else {
        gcd(b % a, a)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::from_integer(0)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self> {
        Rational::new(numerator, denominator)
    }
}

impl From<Rational> for (i64, i64) {
    fn from(r: Rational) -> Self {
        r.terms()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
