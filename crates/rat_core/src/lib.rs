//! rat_core: fixed-size exact rational numbers.
//!
//! This crate is **I/O-free** and never allocates. A [`Rational`] is a signed
//! 64-bit numerator over an unsigned 64-bit denominator; a zero denominator
//! marks the *invalid* state, which is sticky through every operation.
//!
//! - Overflow-checked integer primitives (`checked`)
//! - Construction, canonical zero, GCD reduction (`rational`)
//! - In-place arithmetic with copy-returning wrappers (`arith`)
//! - 128-bit cross-multiplication comparison (`compare`)
//! - Bit-exact `f64` bridge (`float`)
//! - Scale-aware decimal rounding (`rounding`)
//! - `n/d` text form and parser (`text`)
//!
//! Serialization impls are gated behind the `serde` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod errors {
    use core::fmt;

    /// Error set for the fallible siblings of the engine (`try_*`, parsing).
    ///
    /// Numeric failures inside arithmetic never surface here: they turn the
    /// value invalid instead.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub enum CoreError {
        /// An operand was in the invalid state.
        InvalidOperand,
        EmptyInput,
        /// The literal `invalid` is output-only.
        InvalidLiteral,
        BadNumerator,
        BadDenominator,
        ZeroDenominator,
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidOperand => write!(f, "invalid operand"),
                CoreError::EmptyInput => write!(f, "empty input"),
                CoreError::InvalidLiteral => write!(f, "the literal `invalid` is not a number"),
                CoreError::BadNumerator => write!(f, "numerator is not a signed 64-bit integer"),
                CoreError::BadDenominator => write!(f, "denominator is not an unsigned 64-bit integer"),
                CoreError::ZeroDenominator => write!(f, "zero denominator"),
            }
        }
    }

    #[cfg(feature = "std")]
    impl std::error::Error for CoreError {}
}

pub mod checked;
pub mod rational;
pub mod arith;
pub mod compare;
pub mod float;
pub mod rounding;
pub mod text;

pub use errors::CoreError;
pub use rational::Rational;
pub use rounding::RoundingMode;

/// Convenience re-exports: `use rat_core::prelude::*;`
pub mod prelude {
    pub use crate::errors::CoreError;
    pub use crate::rational::Rational;
    pub use crate::rounding::RoundingMode;
}
