// src/rational/decimal.rs
//
// Conversion to and from f64.
// Decimals are quantized to 9 fractional digits, truncated toward zero.

use super::Rational;
use crate::error::{RationalError, Result};

/// Denominator used when quantizing a decimal.
pub const DECIMAL_SCALE: i64 = 1_000_000_000;

impl Rational {
    /// Quantizes `value` to `trunc(value * 10^9) / 10^9`, then simplifies.
    ///
    /// ```
    /// use ratio64::Rational;
    ///
    /// let r = Rational::from_decimal(0.875).unwrap();
    /// assert_eq!(r.terms(), (7, 8));
    /// ```
    ///
    /// Non-finite values and values whose scaled magnitude exceeds `i64`
    /// fail with [`RationalError::DecimalOutOfRange`].
    pub fn from_decimal(value: f64) -> Result<Self> {
        let scaled = (value * DECIMAL_SCALE as f64).trunc();

        // `i64::MAX as f64` rounds up to 2^63, which itself is out of range.
        if !scaled.is_finite() || scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            tracing::debug!(value, "rejected decimal outside the quantizable range");
            return Err(RationalError::DecimalOutOfRange(value));
        }

        let mut quantized = Rational::new_raw(scaled as i64, DECIMAL_SCALE);
        quantized.simplify();

        #[cfg(feature = "trace-quant")]
        tracing::trace!(
            value,
            numerator = quantized.numerator,
            denominator = quantized.denominator,
            "quantized decimal"
        );

        Ok(quantized)
    }

    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// `self` raised to `exponent`, computed in floating point and quantized
    /// back through [`Rational::from_decimal`].
    ///
    /// `1/8 ^ 3/4` is `210224103/1000000000`.
    pub fn pow(&self, exponent: &Rational) -> Result<Self> {
        Rational::from_decimal(self.to_decimal().powf(exponent.to_decimal()))
    }
}
