//! crates/rat_core/src/rounding.rs
//! Scale-aware decimal rounding.
//!
//! `scale > 0` rounds to that many decimal places, `scale == 0` to an integer,
//! `scale < 0` to a multiple of `10^|scale|`. Every intermediate product is
//! overflow-checked in 64 bits and invalidates on overflow; the one exception
//! is a value already exact at the requested scale, which comes back as is.

use crate::checked::{magnitude, mul_i64_u64, mul_u64, with_sign};
use crate::rational::Rational;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the discarded part is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Truncate: `2.7 → 2`, `-2.7 → -2`.
    TowardZero,
    /// `2.1 → 3`, `-2.1 → -3`.
    AwayFromZero,
    /// Nearest; an exact half goes toward +∞: `2.5 → 3`, `-2.5 → -2`.
    HalfUp,
}

/// `10^0 ..= 10^19`, every power of ten that fits in `u64`.
const POW10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// `10^exp`, or `None` past `u64`.
#[inline]
pub fn pow10(exp: u32) -> Option<u64> {
    POW10.get(exp as usize).copied()
}

/// `n / d` rounded per `mode`. `d > 0`.
fn div_round(n: i64, d: u64, mode: RoundingMode) -> Option<i64> {
    let mag = magnitude(n);
    let q = mag / d;
    let r = mag % d;
    let bump = r != 0
        && match mode {
            RoundingMode::TowardZero => false,
            RoundingMode::AwayFromZero => true,
            RoundingMode::HalfUp => {
                // r vs d - r avoids doubling r.
                let rest = d - r;
                if r == rest { n > 0 } else { r > rest }
            }
        };
    // A bump only happens when d >= 2, so q + 1 <= mag.
    with_sign(q + bump as u64, n < 0)
}

/// `den` divides `10^places`, i.e. `den = 2^a·5^b` with `a, b <= places`.
fn exact_at_scale(den: u64, places: u32) -> bool {
    let twos = den.trailing_zeros();
    let mut rest = den >> twos;
    let mut fives = 0u32;
    while rest % 5 == 0 {
        rest /= 5;
        fives += 1;
    }
    rest == 1 && twos <= places && fives <= places
}

/// Rounding to `places >= 0` decimal places of a reduced, non-zero value.
fn round_places(v: Rational, mode: RoundingMode, places: u32) -> Rational {
    let (num, den) = v.into_raw();
    // Already exact at this scale: re-expressed over 10^places it is the same
    // value, so it comes back unchanged, even when 10^places overflows.
    if exact_at_scale(den, places) {
        return v;
    }
    let Some(factor) = pow10(places) else {
        return Rational::INVALID;
    };
    mul_i64_u64(num, factor)
        .and_then(|scaled| div_round(scaled, den, mode))
        .map_or(Rational::INVALID, |q| Rational::new(q, factor))
}

/// Rounding to a multiple of `10^tens` of a reduced, non-zero value.
fn round_tens(v: Rational, mode: RoundingMode, tens: u32) -> Rational {
    let (num, den) = v.into_raw();
    let Some(factor) = pow10(tens) else {
        // Coarser than any representable step.
        return Rational::ZERO;
    };
    mul_u64(den, factor)
        .and_then(|scaled_den| div_round(num, scaled_den, mode))
        .and_then(|q| mul_i64_u64(q, factor))
        .map_or(Rational::INVALID, Rational::from_integer)
}

impl Rational {
    /// Round in place at `scale` with `mode`. Invalid stays invalid; overflow
    /// invalidates.
    pub fn round_mut(&mut self, mode: RoundingMode, scale: i32) {
        if self.is_invalid() {
            return;
        }
        if self.is_zero() {
            *self = Rational::ZERO;
            return;
        }
        let v = self.reduced();
        *self = if scale >= 0 {
            round_places(v, mode, scale.unsigned_abs())
        } else {
            round_tens(v, mode, scale.unsigned_abs())
        };
    }

    /// Toward +∞ at `scale`.
    pub fn ceil_mut(&mut self, scale: i32) {
        let mode = if self.sign() >= 0 { RoundingMode::AwayFromZero } else { RoundingMode::TowardZero };
        self.round_mut(mode, scale);
    }

    /// Toward −∞ at `scale`.
    pub fn floor_mut(&mut self, scale: i32) {
        let mode = if self.sign() >= 0 { RoundingMode::TowardZero } else { RoundingMode::AwayFromZero };
        self.round_mut(mode, scale);
    }

    #[inline]
    pub fn round(self, mode: RoundingMode, scale: i32) -> Rational {
        self.with(|r| r.round_mut(mode, scale))
    }

    #[inline]
    pub fn ceil(self, scale: i32) -> Rational {
        self.with(|r| r.ceil_mut(scale))
    }

    #[inline]
    pub fn floor(self, scale: i32) -> Rational {
        self.with(|r| r.floor_mut(scale))
    }
}

/* ---------------------------------- Tests --------------------------------- */
