//! crates/rat_core/src/text.rs
//! Text form: `n/d`, bare `n` when `d == 1`, `invalid` for the invalid state.

use core::fmt;
use core::str::FromStr;

use crate::errors::CoreError;
use crate::rational::Rational;

/// Token printed for the invalid state. Never accepted by the parser.
pub const INVALID_TOKEN: &str = "invalid";

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (num, den) = self.into_raw();
        match den {
            0 => f.write_str(INVALID_TOKEN),
            1 => write!(f, "{num}"),
            _ => write!(f, "{num}/{den}"),
        }
    }
}

impl FromStr for Rational {
    type Err = CoreError;

    /// Accepts `n/d` or `n`; the result is in lowest terms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CoreError::EmptyInput);
        }
        if s == INVALID_TOKEN {
            return Err(CoreError::InvalidLiteral);
        }
        let (num, den) = match s.split_once('/') {
            Some((n, d)) => (n, Some(d)),
            None => (s, None),
        };
        let num: i64 = num.parse().map_err(|_| CoreError::BadNumerator)?;
        let den: u64 = match den {
            Some(d) => d.parse().map_err(|_| CoreError::BadDenominator)?,
            None => 1,
        };
        if den == 0 {
            return Err(CoreError::ZeroDenominator);
        }
        Ok(Rational::new(num, den))
    }
}

impl TryFrom<&str> for Rational {
    type Error = CoreError;
    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/* ---------------------------------- Serde --------------------------------- */

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::de::{Error as DeError, Unexpected, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Rational {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(self)
        }
    }

    struct RationalVisitor;

    impl<'de> Visitor<'de> for RationalVisitor {
        type Value = Rational;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a rational as \"n/d\" or \"n\"")
        }

        fn visit_str<E: DeError>(self, v: &str) -> Result<Rational, E> {
            v.parse().map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    impl<'de> Deserialize<'de> for Rational {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            d.deserialize_str(RationalVisitor)
        }
    }
}

/* ---------------------------------- Tests --------------------------------- */
