//! Rational numbers over fixed-width 64-bit terms.
//!
//! ```
//! use ratio64::Rational;
//!
//! let f1 = Rational::new(3, 4)?;
//! let f2: Rational = "1/2".parse()?;
//!
//! assert_eq!((f1 * f2).to_string(), "3/8");
//! assert_eq!((f1 / f2).to_string(), "6/4");
//! assert!(f1 > f2);
//! # Ok::<(), ratio64::RationalError>(())
//! ```

// Rational ops often use other "suspicious" ops
#![allow(clippy::suspicious_arithmetic_impl)]

pub mod error;
pub mod rational;
pub mod wasm_api;

pub use error::{RationalError, Result};
pub use rational::{Rational, DECIMAL_SCALE};
pub use wasm_api::JsRational;
