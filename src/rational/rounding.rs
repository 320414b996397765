// src/rational/rounding.rs
//
// Rounding to whole numbers. Every result has denominator 1.

use super::Rational;
use num_integer::Integer;

impl Rational {
    pub fn is_integer(&self) -> bool {
        self.numerator % self.denominator == 0
    }

    /// Rounds toward negative infinity.
    pub fn floor(&self) -> Self {
        let (n, d) = self.sign_normalized();
        Rational::from_integer(Integer::div_floor(&n, &d))
    }

    /// Rounds toward positive infinity.
    pub fn ceil(&self) -> Self {
        let (n, d) = self.sign_normalized();
        Rational::from_integer(-Integer::div_floor(&-n, &d))
    }

    /// Rounds toward zero.
    pub fn trunc(&self) -> Self {
        Rational::from_integer(self.numerator / self.denominator)
    }

    /// Rounds half away from zero.
    pub fn round(&self) -> Self {
        let (n, d) = self.sign_normalized();
        // floor(|x| + 1/2) = (2|n| + d) / 2d
        let (abs_n, d) = (i128::from(n).abs(), i128::from(d));
        let rounded = ((2 * abs_n + d) / (2 * d)) as i64;
        Rational::from_integer(if n < 0 { -rounded } else { rounded })
    }

    /// `self - self.trunc()`, over the same denominator.
    pub fn fract(&self) -> Self {
        Rational::new_raw(self.numerator % self.denominator, self.denominator)
    }

    fn sign_normalized(&self) -> (i64, i64) {
        if self.denominator < 0 {
            (-self.numerator, -self.denominator)
        } else {
            (self.numerator, self.denominator)
        }
    }
}
