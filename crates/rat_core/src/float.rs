//! crates/rat_core/src/float.rs
//! Bit-exact bridge between `f64` and `Rational`.
//!
//! A finite double is `mantissa · 2^exponent`. Whenever that value fits the
//! 64-bit numerator with a power-of-two denominator no larger than `2^63`, the
//! conversion is exact; values finer than `2^-63` are rounded half-to-even on
//! the discarded bits, and integers beyond the `i64` range are invalid.

use crate::checked::{magnitude_limit, with_sign};
use crate::rational::Rational;

const EXP_MASK: u64 = 0x7FF;
const FRAC_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
const IMPLICIT_BIT: u64 = 1 << 52;
/// Exponent bias plus the 52 fraction bits.
const EXP_OFFSET: i32 = 1023 + 52;
const SUBNORMAL_EXP: i32 = -1074;
/// Largest power of two used as a denominator.
const MAX_DEN_SHIFT: u32 = 63;

/// `m >> shift`, rounding the discarded bits half-to-even. `shift >= 1`.
fn shift_right_half_even(m: u64, shift: u32) -> u64 {
    if shift > 64 {
        // m < 2^64 <= 2^(shift - 1): below one half.
        return 0;
    }
    let m = m as u128;
    let q = m >> shift;
    let rem = m & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let q = if rem > half || (rem == half && q & 1 == 1) { q + 1 } else { q };
    q as u64
}

impl Rational {
    /// Exact fraction for a double. NaN and infinities are invalid; `±0.0`
    /// is canonical zero.
    pub fn from_f64(value: f64) -> Rational {
        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased = ((bits >> 52) & EXP_MASK) as i32;
        let frac = bits & FRAC_MASK;

        if biased == EXP_MASK as i32 {
            return Rational::INVALID;
        }
        if biased == 0 && frac == 0 {
            return Rational::ZERO;
        }

        let (mut mantissa, mut exponent) = if biased == 0 {
            (frac, SUBNORMAL_EXP)
        } else {
            (frac | IMPLICIT_BIT, biased - EXP_OFFSET)
        };

        // Trailing zero bits only inflate the denominator.
        if exponent < 0 {
            let tz = mantissa.trailing_zeros().min(exponent.unsigned_abs());
            mantissa >>= tz;
            exponent += tz as i32;
        }

        let (mag, den) = if exponent >= 0 {
            // An integer: any positive denominator only grows the numerator,
            // so it must fit as-is.
            let shift = exponent as u32;
            let limit = magnitude_limit(negative) as u128;
            if shift > 63 || (mantissa as u128) << shift > limit {
                return Rational::INVALID;
            }
            (mantissa << shift, 1u64)
        } else {
            let k = exponent.unsigned_abs();
            if k <= MAX_DEN_SHIFT {
                (mantissa, 1u64 << k)
            } else {
                (shift_right_half_even(mantissa, k - MAX_DEN_SHIFT), 1u64 << MAX_DEN_SHIFT)
            }
        };

        match with_sign(mag, negative) {
            Some(n) => Rational::new(n, den),
            None => Rational::INVALID,
        }
    }

    /// `numerator / denominator` as a double; NaN for the invalid state.
    pub fn to_f64(&self) -> f64 {
        if self.is_invalid() {
            return f64::NAN;
        }
        self.numer() as f64 / self.denom() as f64
    }
}

impl From<f64> for Rational {
    fn from(value: f64) -> Self {
        Rational::from_f64(value)
    }
}

/* ---------------------------------- Tests --------------------------------- */
