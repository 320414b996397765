// src/error.rs
//
// Error type shared by every fallible Rational operation.
// Construction failures are reported here; arithmetic on valid values only
// fails through the explicit `try_*` entry points.

use std::fmt;

pub type Result<T> = std::result::Result<T, RationalError>;

#[derive(Debug, Clone, PartialEq)]
pub enum RationalError {
    /// A zero denominator was supplied to a constructor.
    InvalidDenominator,
    /// Text that does not follow the `digits[/digits]` or `digits[:digits]` grammar.
    InvalidRatio { text: String },
    /// A decimal that is not finite, or too large once scaled to 9 fractional digits.
    DecimalOutOfRange(f64),
    DivisionByZero,
}

impl RationalError {
    pub fn invalid_ratio(text: &str) -> Self {
        RationalError::InvalidRatio {
            text: text.to_string(),
        }
    }

    /// Errors caused by a bad constructor argument rather than by arithmetic.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RationalError::InvalidDenominator | RationalError::InvalidRatio { .. }
        )
    }
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::InvalidDenominator => {
                write!(f, "0 is an invalid argument for denominator")
            },
            RationalError::InvalidRatio { text } => {
                write!(f, "'{}' is not a valid fraction or ratio", text)
            },
            RationalError::DecimalOutOfRange(value) => {
                write!(f, "{} cannot be represented with a 64-bit numerator", value)
            },
            RationalError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for RationalError {}
