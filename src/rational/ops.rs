// src/rational/ops.rs
//
// Arithmetic. Results are never reduced; callers simplify when they need to.

use super::{gcd, Rational};
use crate::error::{RationalError, Result};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! forward_all_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a, 'b> $imp<&'b Rational> for &'a Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: &'b Rational) -> Rational {
                (*self).$method(*other)
            }
        }

        impl<'a> $imp<Rational> for &'a Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: Rational) -> Rational {
                (*self).$method(other)
            }
        }

        impl<'a> $imp<&'a Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, other: &'a Rational) -> Rational {
                self.$method(*other)
            }
        }
    };
}

macro_rules! op_assign {
    (impl $imp:ident, $method:ident, $op:tt) => {
        impl $imp for Rational {
            #[inline]
            fn $method(&mut self, other: Rational) {
                *self = *self $op other;
            }
        }

        impl<'a> $imp<&'a Rational> for Rational {
            #[inline]
            fn $method(&mut self, other: &'a Rational) {
                *self = *self $op *other;
            }
        }
    };
}

// a/b `op` c/d = (a*(lcm/b) `op` c*(lcm/d)) / lcm, lcm = b*d / gcd(b, d)
macro_rules! lcm_arith_impl {
    (impl $imp:ident, $method:ident) => {
        forward_all_binop!(impl $imp, $method);

        impl $imp for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                let lcm = (self.denominator * rhs.denominator) / gcd(self.denominator, rhs.denominator);
                let lhs_numerator = self.numerator * (lcm / self.denominator);
                let rhs_numerator = rhs.numerator * (lcm / rhs.denominator);
                Rational::new_raw(lhs_numerator.$method(rhs_numerator), lcm)
            }
        }
    };
}

lcm_arith_impl!(impl Add, add);
lcm_arith_impl!(impl Sub, sub);

forward_all_binop!(impl Mul, mul);
impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational::new_raw(self.numerator * rhs.numerator, self.denominator * rhs.denominator)
    }
}

forward_all_binop!(impl Div, div);
impl Div for Rational {
    type Output = Rational;

    /// **Panics if `rhs` is zero.** Use [`Rational::try_div`] to get an error instead.
    fn div(self, rhs: Rational) -> Rational {
        if rhs.numerator == 0 {
            panic!("Division by zero");
        }
        Rational::new_raw(self.numerator * rhs.denominator, self.denominator * rhs.numerator)
    }
}

op_assign!(impl AddAssign, add_assign, +);
op_assign!(impl SubAssign, sub_assign, -);
op_assign!(impl MulAssign, mul_assign, *);
op_assign!(impl DivAssign, div_assign, /);

impl Neg for Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational::new_raw(-self.numerator, self.denominator)
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        -*self
    }
}

impl Rational {
    /// Adds one whole in place: `n/d` becomes `(n + d)/d`.
    pub fn increment(&mut self) {
        self.numerator += self.denominator;
    }

    /// Subtracts one whole in place: `n/d` becomes `(n - d)/d`.
    pub fn decrement(&mut self) {
        self.numerator -= self.denominator;
    }

    pub fn try_div(&self, rhs: &Rational) -> Result<Self> {
        if rhs.numerator == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// `d/n`. **Panics if `self` is zero.**
    pub fn recip(&self) -> Self {
        if self.numerator == 0 {
            panic!("Division by zero");
        }
        Rational::new_raw(self.denominator, self.numerator)
    }

    pub fn try_recip(&self) -> Result<Self> {
        if self.numerator == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(self.recip())
    }

    pub fn is_positive(&self) -> bool {
        self.numerator != 0 && (self.numerator > 0) == (self.denominator > 0)
    }

    pub fn is_negative(&self) -> bool {
        self.numerator != 0 && (self.numerator > 0) != (self.denominator > 0)
    }

    /// Both terms made non-negative.
    pub fn abs(&self) -> Self {
        Rational::new_raw(self.numerator.abs(), self.denominator.abs())
    }

    /// `1/1`, `0/1` or `-1/1`.
    pub fn signum(&self) -> Self {
        if self.is_positive() {
            Rational::from_integer(1)
        } else if self.is_negative() {
            Rational::from_integer(-1)
        } else {
            Rational::from_integer(0)
        }
    }
}
