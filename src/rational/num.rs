// src/rational/num.rs
//
// num-traits integration. The checked operations follow the same formulas as
// the operators but return `None` instead of overflowing.

use super::{gcd, Rational};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, One, ToPrimitive, Zero};

impl Zero for Rational {
    fn zero() -> Self {
        Rational::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(1)
    }
}

macro_rules! checked_lcm_arith_impl {
    (impl $imp:ident, $method:ident) => {
        impl $imp for Rational {
            fn $method(&self, rhs: &Rational) -> Option<Rational> {
                let lcm = self
                    .denominator
                    .checked_mul(rhs.denominator)?
                    .checked_div(gcd(self.denominator, rhs.denominator))?;
                let lhs_numerator = self.numerator.checked_mul(lcm.checked_div(self.denominator)?)?;
                let rhs_numerator = rhs.numerator.checked_mul(lcm.checked_div(rhs.denominator)?)?;
                Some(Rational::new_raw(lhs_numerator.$method(rhs_numerator)?, lcm))
            }
        }
    };
}

checked_lcm_arith_impl!(impl CheckedAdd, checked_add);
checked_lcm_arith_impl!(impl CheckedSub, checked_sub);

impl CheckedMul for Rational {
    fn checked_mul(&self, rhs: &Rational) -> Option<Rational> {
        Some(Rational::new_raw(
            self.numerator.checked_mul(rhs.numerator)?,
            self.denominator.checked_mul(rhs.denominator)?,
        ))
    }
}

impl CheckedDiv for Rational {
    fn checked_div(&self, rhs: &Rational) -> Option<Rational> {
        if rhs.numerator == 0 {
            return None;
        }
        Some(Rational::new_raw(
            self.numerator.checked_mul(rhs.denominator)?,
            self.denominator.checked_mul(rhs.numerator)?,
        ))
    }
}

impl ToPrimitive for Rational {
    /// Integer part, rounded toward zero.
    fn to_i64(&self) -> Option<i64> {
        self.numerator.checked_div(self.denominator)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|n| u64::try_from(n).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_decimal())
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Rational::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        i64::try_from(n).ok().map(Rational::from_integer)
    }

    /// Quantized like [`Rational::from_decimal`].
    fn from_f64(n: f64) -> Option<Self> {
        Rational::from_decimal(n).ok()
    }
}
