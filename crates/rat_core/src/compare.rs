//! crates/rat_core/src/compare.rs
//! Comparison engine.
//!
//! Magnitudes are cross-multiplied into full 128-bit products, so the order is
//! exact for every pair of valid values. No reduction or fallback is needed.

use core::cmp::Ordering;

use crate::checked::{magnitude, wide_mul};
use crate::errors::CoreError;
use crate::rational::Rational;

/// Order of two valid values.
fn cmp_valid(a: &Rational, b: &Rational) -> Ordering {
    let (an, ad) = a.into_raw();
    let (bn, bd) = b.into_raw();
    if an == 0 && bn == 0 {
        return Ordering::Equal;
    }

    let a_neg = an < 0;
    let b_neg = bn < 0;
    if a_neg != b_neg {
        return if a_neg { Ordering::Less } else { Ordering::Greater };
    }

    // |a.n|·b.d vs |b.n|·a.d, high half first.
    let lhs = wide_mul(magnitude(an), bd);
    let rhs = wide_mul(magnitude(bn), ad);
    let ord = lhs.cmp(&rhs);
    if a_neg { ord.reverse() } else { ord }
}

impl Rational {
    /// Three-way compare. Invalid operands are unordered and report `Equal`;
    /// use [`Rational::try_compare`] to tell that case apart.
    pub fn compare(&self, other: &Rational) -> Ordering {
        if self.is_invalid() || other.is_invalid() {
            return Ordering::Equal;
        }
        cmp_valid(self, other)
    }

    /// Value equality; `false` when either operand is invalid.
    #[inline]
    pub fn equals(&self, other: &Rational) -> bool {
        self.is_valid() && other.is_valid() && cmp_valid(self, other) == Ordering::Equal
    }

    #[inline]
    pub fn less_than(&self, other: &Rational) -> bool {
        self.is_valid() && other.is_valid() && cmp_valid(self, other) == Ordering::Less
    }

    #[inline]
    pub fn greater_than(&self, other: &Rational) -> bool {
        self.is_valid() && other.is_valid() && cmp_valid(self, other) == Ordering::Greater
    }

    /// Like [`Rational::compare`] but an invalid operand is an error.
    pub fn try_compare(&self, other: &Rational) -> Result<Ordering, CoreError> {
        if self.is_invalid() || other.is_invalid() {
            return Err(CoreError::InvalidOperand);
        }
        Ok(cmp_valid(self, other))
    }

    #[inline]
    pub fn try_equals(&self, other: &Rational) -> Result<bool, CoreError> {
        self.try_compare(other).map(Ordering::is_eq)
    }

    #[inline]
    pub fn try_less_than(&self, other: &Rational) -> Result<bool, CoreError> {
        self.try_compare(other).map(Ordering::is_lt)
    }

    #[inline]
    pub fn try_greater_than(&self, other: &Rational) -> Result<bool, CoreError> {
        self.try_compare(other).map(Ordering::is_gt)
    }
}

impl PartialOrd for Rational {
    /// `None` when either side is invalid.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_compare(other).ok()
    }
}

/* ---------------------------------- Tests --------------------------------- */
