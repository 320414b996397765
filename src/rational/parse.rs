// src/rational/parse.rs
//
// Text form: `<digits>` `/` or `:` `<digits>`.
// No sign, no whitespace, at most one delimiter. An empty numerator term
// reads as 0; the denominator term must end up non-zero.

use super::Rational;
use crate::error::{RationalError, Result};
use std::str::FromStr;

impl Rational {
    /// Parses `"7/10"` or `"7:10"`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut terms = [0i64; 2];
        let mut index = 0;

        for c in text.chars() {
            match c {
                '0'..='9' => {
                    let digit = i64::from(c as u8 - b'0');
                    terms[index] = terms[index]
                        .checked_mul(10)
                        .and_then(|t| t.checked_add(digit))
                        .ok_or_else(|| reject(text, "term overflows i64"))?;
                },
                '/' | ':' if index == 0 => index += 1,
                '/' | ':' => return Err(reject(text, "more than one delimiter")),
                _ => return Err(reject(text, "unexpected character")),
            }
        }

        Rational::new(terms[0], terms[1])
    }
}

fn reject(text: &str, reason: &str) -> RationalError {
    tracing::debug!(text, reason, "rejected ratio text");
    RationalError::invalid_ratio(text)
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self> {
        Rational::parse(s)
    }
}
