//! crates/rat_core/src/rational.rs
//! The `Rational` value: construction, canonical zero, predicates, reduction.

use core::hash::{Hash, Hasher};

use crate::checked::{magnitude, with_sign};

/// Exact fraction `num / den` with a signed numerator and unsigned denominator.
///
/// `den == 0` is the *invalid* state. It is produced by a zero denominator at
/// construction, by any 64-bit overflow, by division by zero, and by
/// unrepresentable doubles; once set it survives every further operation.
///
/// Construction reduces to lowest terms. Arithmetic does not: results stay
/// exact but unreduced until [`Rational::reduce`] is called.
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    num: i64,
    den: u64,
}

/// Euclid on unsigned operands. `gcd(0, b) == b`.
#[inline]
pub fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/* ------------------------------ Construction ------------------------------ */

impl Rational {
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    pub const ONE: Rational = Rational { num: 1, den: 1 };
    pub const INVALID: Rational = Rational { num: 0, den: 0 };

    /// Build `num / den` in lowest terms. A zero denominator yields the
    /// invalid state; a zero numerator yields canonical zero.
    pub fn new(num: i64, den: u64) -> Rational {
        if den == 0 {
            return Rational::INVALID;
        }
        if num == 0 {
            return Rational::ZERO;
        }
        let mut r = Rational { num, den };
        r.reduce();
        r
    }

    #[inline]
    pub const fn from_integer(n: i64) -> Rational {
        Rational { num: n, den: 1 }
    }

    /// Store a pair as-is, only canonicalizing zero and invalid.
    /// Used by the arithmetic engine, which never reduces.
    #[inline]
    pub(crate) fn from_parts(num: i64, den: u64) -> Rational {
        if den == 0 {
            Rational::INVALID
        } else if num == 0 {
            Rational::ZERO
        } else {
            Rational { num, den }
        }
    }

    #[inline]
    pub const fn numer(&self) -> i64 {
        self.num
    }

    #[inline]
    pub const fn denom(&self) -> u64 {
        self.den
    }

    #[inline]
    pub const fn into_raw(self) -> (i64, u64) {
        (self.num, self.den)
    }

    #[inline]
    pub(crate) fn invalidate(&mut self) {
        *self = Rational::INVALID;
    }

    /// Copy, apply an in-place operation to the copy, return the copy.
    /// Every copy-returning operation of the engine is built on this.
    #[inline]
    pub(crate) fn with(mut self, op: impl FnOnce(&mut Rational)) -> Rational {
        op(&mut self);
        self
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::ZERO
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Rational::from_integer(n as i64)
    }
}

impl From<u32> for Rational {
    fn from(n: u32) -> Self {
        Rational::from_integer(n as i64)
    }
}

/* ------------------------------- Predicates ------------------------------- */

impl Rational {
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.den != 0
    }

    #[inline]
    pub const fn is_invalid(&self) -> bool {
        self.den == 0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.den != 0 && self.num == 0
    }

    /// True for `1/1` and for unreduced forms such as `3/3`.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.num > 0 && self.num as u64 == self.den
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.den != 0 && magnitude(self.num) % self.den == 0
    }

    /// `-1`, `0` or `1`; the invalid state reports `0`.
    #[inline]
    pub const fn sign(&self) -> i32 {
        if self.den == 0 {
            0
        } else if self.num < 0 {
            -1
        } else if self.num > 0 {
            1
        } else {
            0
        }
    }
}

/* -------------------------------- Reduction ------------------------------- */

impl Rational {
    /// Divide both components by `gcd(|num|, den)`. No-op on invalid.
    pub fn reduce(&mut self) {
        if self.is_invalid() {
            return;
        }
        if self.num == 0 {
            self.den = 1;
            return;
        }
        let mag = magnitude(self.num);
        let g = gcd_u64(mag, self.den);
        if g > 1 {
            // mag / g <= mag, so the sign always re-applies.
            match with_sign(mag / g, self.num < 0) {
                Some(n) => {
                    self.num = n;
                    self.den /= g;
                }
                None => self.invalidate(),
            }
        }
    }

    #[inline]
    pub fn reduced(self) -> Rational {
        self.with(Rational::reduce)
    }

    /// Negate in place; `i64::MIN` has no positive counterpart and invalidates.
    pub fn neg_mut(&mut self) {
        if self.is_invalid() {
            return;
        }
        match with_sign(magnitude(self.num), self.num > 0) {
            Some(n) => self.num = n,
            None => self.invalidate(),
        }
    }

    #[inline]
    pub fn negated(self) -> Rational {
        self.with(Rational::neg_mut)
    }

    pub fn abs_mut(&mut self) {
        if self.num < 0 {
            self.neg_mut();
        }
    }

    #[inline]
    pub fn absolute(self) -> Rational {
        self.with(Rational::abs_mut)
    }
}

/* ------------------------------ Value equality ---------------------------- */

impl PartialEq for Rational {
    /// Value equality: `1/2 == 2/4`. Invalid equals only invalid.
    fn eq(&self, other: &Self) -> bool {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => self.equals(other),
            (false, false) => true,
            _ => false,
        }
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let r = self.reduced();
        r.num.hash(state);
        r.den.hash(state);
    }
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd_u64(12, 18), 6);
        assert_eq!(gcd_u64(0, 9), 9);
        assert_eq!(gcd_u64(9, 0), 9);
        assert_eq!(gcd_u64(17, 5), 1);
    }

    #[test]
    fn construction_reduces() {
        assert_eq!(Rational::new(6, 8).into_raw(), (3, 4));
        assert_eq!(Rational::new(-6, 8).into_raw(), (-3, 4));
        assert_eq!(Rational::new(0, 7).into_raw(), (0, 1));
        assert!(Rational::new(5, 0).is_invalid());
        assert_eq!(Rational::new(5, 0).into_raw(), (0, 0));
    }

    #[test]
    fn construction_handles_min_over_power_of_two() {
        assert_eq!(Rational::new(i64::MIN, 1 << 63).into_raw(), (-1, 1));
        assert_eq!(Rational::new(i64::MIN, 2).into_raw(), (i64::MIN / 2, 1));
    }

    #[test]
    fn from_integer_is_not_reduced_needlessly() {
        assert_eq!(Rational::from_integer(-42).into_raw(), (-42, 1));
        assert_eq!(Rational::from(7i32).into_raw(), (7, 1));
        assert_eq!(Rational::default(), Rational::ZERO);
    }

    #[test]
    fn predicates() {
        assert!(Rational::ONE.is_one());
        assert!(Rational::from_parts(3, 3).is_one());
        assert!(!Rational::from_integer(-1).is_one());
        assert!(Rational::ZERO.is_zero());
        assert!(!Rational::INVALID.is_zero());
        assert_eq!(Rational::new(-1, 3).sign(), -1);
        assert_eq!(Rational::new(1, 3).sign(), 1);
        assert_eq!(Rational::ZERO.sign(), 0);
        assert_eq!(Rational::INVALID.sign(), 0);
        assert!(Rational::from_parts(6, 3).is_integer());
        assert!(!Rational::new(1, 3).is_integer());
        assert!(!Rational::INVALID.is_integer());
    }

    #[test]
    fn reduce_and_reduced() {
        let r = Rational::from_parts(10, 4);
        assert_eq!(r.reduced().into_raw(), (5, 2));
        assert_eq!(r.into_raw(), (10, 4));
        let mut m = r;
        m.reduce();
        assert_eq!(m.into_raw(), (5, 2));
        let mut bad = Rational::INVALID;
        bad.reduce();
        assert!(bad.is_invalid());
    }

    #[test]
    fn negation_guards_min() {
        assert_eq!(Rational::new(1, 2).negated().into_raw(), (-1, 2));
        assert_eq!(Rational::from_integer(i64::MIN + 1).negated().into_raw(), (i64::MAX, 1));
        assert!(Rational::from_integer(i64::MIN).negated().is_invalid());
        assert!(Rational::from_integer(i64::MIN).absolute().is_invalid());
        assert_eq!(Rational::new(-3, 4).absolute().into_raw(), (3, 4));
        assert!(Rational::INVALID.negated().is_invalid());
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Rational::from_parts(2, 4), Rational::new(1, 2));
        assert_ne!(Rational::new(1, 2), Rational::INVALID);
        assert_eq!(Rational::INVALID, Rational::INVALID);
    }

    #[cfg(feature = "std")]
    #[test]
    fn hash_agrees_with_equality() {
        use std::collections::hash_map::DefaultHasher;
        let h = |r: Rational| {
            let mut s = DefaultHasher::new();
            r.hash(&mut s);
            s.finish()
        };
        assert_eq!(h(Rational::from_parts(2, 4)), h(Rational::new(1, 2)));
        assert_eq!(h(Rational::from_parts(0, 1)), h(Rational::ZERO));
    }
}
