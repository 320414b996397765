// src/rational/cmp.rs

use super::Rational;
use std::cmp::Ordering;

// The operators compare decimal values. Two fractions that are equal as
// rationals may compare unequal once both sides round to f64, and the other
// way around; `exact_cmp` has no such gap.

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.to_decimal() == other.to_decimal()
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_decimal().partial_cmp(&other.to_decimal())
    }
}

impl Rational {
    /// Compares `a/b` with `c/d` as `a*d` against `c*b` in 128-bit integers.
    ///
    /// The sign may sit on either term. Neither denominator may be zero.
    pub fn exact_cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.widened();
        let (c, d) = other.widened();
        (a * d).cmp(&(c * b))
    }

    pub fn exact_eq(&self, other: &Self) -> bool {
        self.exact_cmp(other) == Ordering::Equal
    }

    /// Terms in i128 with the sign moved onto the numerator.
    fn widened(&self) -> (i128, i128) {
        let (n, d) = (i128::from(self.numerator), i128::from(self.denominator));
        if d < 0 {
            (-n, -d)
        } else {
            (n, d)
        }
    }
}
