//! crates/rat_core/src/arith.rs
//! Arithmetic engine: one in-place core per operation, copy-returning
//! wrappers and operator traits on top.
//!
//! Rules shared by all four operations:
//! - an invalid operand makes the result invalid;
//! - any 64-bit overflow makes the result invalid (never a wrapped value);
//! - a zero numerator is stored as canonical `0/1`;
//! - results are **not** reduced (call [`Rational::reduce`] when needed).

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::checked::{add_i64, magnitude, mul_i64, mul_i64_u64, mul_u64, sub_i64, wide_mul, with_sign};
use crate::rational::Rational;

type Combine = fn(i64, i64) -> Option<i64>;

/// `(a·d ± c·b) / (b·d)` with every product and the final combination checked.
#[inline]
fn cross_combine(a: i64, b: u64, c: i64, d: u64, combine: Combine) -> Option<(i64, u64)> {
    let ad = mul_i64_u64(a, d)?;
    let cb = mul_i64_u64(c, b)?;
    let bd = mul_u64(b, d)?;
    Some((combine(ad, cb)?, bd))
}

impl Rational {
    #[inline]
    fn store(&mut self, out: Option<(i64, u64)>) {
        *self = match out {
            Some((n, d)) => Rational::from_parts(n, d),
            None => Rational::INVALID,
        };
    }

    fn add_sub_mut(&mut self, rhs: Rational, combine: Combine) {
        if self.is_invalid() || rhs.is_invalid() {
            return self.invalidate();
        }
        let (a, b) = self.into_raw();
        let (c, d) = rhs.into_raw();
        let out = if b == d {
            combine(a, c).map(|n| (n, b))
        } else {
            cross_combine(a, b, c, d, combine)
        };
        self.store(out);
    }

    /// `self += rhs` in place.
    pub fn add_mut(&mut self, rhs: Rational) {
        self.add_sub_mut(rhs, add_i64);
    }

    /// `self -= rhs` in place.
    pub fn sub_mut(&mut self, rhs: Rational) {
        self.add_sub_mut(rhs, sub_i64);
    }

    /// `self *= rhs` in place: `(a·c) / (b·d)`.
    pub fn mul_mut(&mut self, rhs: Rational) {
        if self.is_invalid() || rhs.is_invalid() {
            return self.invalidate();
        }
        if self.is_zero() || rhs.is_zero() {
            *self = Rational::ZERO;
            return;
        }
        let (a, b) = self.into_raw();
        let (c, d) = rhs.into_raw();
        self.store(mul_i64(a, c).zip(mul_u64(b, d)));
    }

    /// `self /= rhs` in place. A zero-numerator divisor, whatever its
    /// denominator, is division by zero and invalidates.
    ///
    /// Multiplies by the reciprocal: the divisor's sign is pulled out, the
    /// magnitudes are multiplied unsigned, and the sign is re-applied.
    pub fn div_mut(&mut self, rhs: Rational) {
        if self.is_invalid() || rhs.is_invalid() || rhs.numer() == 0 {
            return self.invalidate();
        }
        if self.is_zero() {
            *self = Rational::ZERO;
            return;
        }
        let (a, b) = self.into_raw();
        let (c, d) = rhs.into_raw();
        let negative = (a < 0) != (c < 0);
        let num = wide_mul(magnitude(a), d)
            .narrow()
            .and_then(|m| with_sign(m, negative));
        let den = mul_u64(b, magnitude(c));
        self.store(num.zip(den));
    }

    /// Replace `n/d` by `d/n` in place. Zero has no reciprocal.
    pub fn recip_mut(&mut self) {
        if self.is_invalid() || self.is_zero() {
            return self.invalidate();
        }
        let (n, d) = self.into_raw();
        let out = with_sign(d, n < 0).map(|num| (num, magnitude(n)));
        self.store(out);
    }

    #[inline]
    pub fn plus(self, rhs: Rational) -> Rational {
        self.with(|r| r.add_mut(rhs))
    }

    #[inline]
    pub fn minus(self, rhs: Rational) -> Rational {
        self.with(|r| r.sub_mut(rhs))
    }

    #[inline]
    pub fn times(self, rhs: Rational) -> Rational {
        self.with(|r| r.mul_mut(rhs))
    }

    #[inline]
    pub fn divided_by(self, rhs: Rational) -> Rational {
        self.with(|r| r.div_mut(rhs))
    }

    #[inline]
    pub fn reciprocal(self) -> Rational {
        self.with(Rational::recip_mut)
    }
}

/* ---------------------------- Operator traits ----------------------------- */

macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $core:ident) => {
        impl $Op for Rational {
            type Output = Rational;
            #[inline]
            fn $op(self, rhs: Rational) -> Rational {
                self.with(|r| r.$core(rhs))
            }
        }

        impl $OpAssign for Rational {
            #[inline]
            fn $op_assign(&mut self, rhs: Rational) {
                self.$core(rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add_mut);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub_mut);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul_mut);
forward_binop!(Div, div, DivAssign, div_assign, div_mut);

impl Neg for Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        self.negated()
    }
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: u64) -> Rational {
        Rational::new(n, d)
    }

    #[test]
    fn add_same_denominator_keeps_denominator() {
        let x = Rational::from_parts(1, 6).plus(Rational::from_parts(3, 6));
        assert_eq!(x.into_raw(), (4, 6));
    }

    #[test]
    fn add_cross_denominator_is_unreduced() {
        let x = r(1, 2).plus(r(1, 3));
        assert_eq!(x.into_raw(), (5, 6));
        let y = r(1, 4).plus(r(1, 6));
        assert_eq!(y.into_raw(), (10, 24));
        assert_eq!(y.reduced().into_raw(), (5, 12));
    }

    #[test]
    fn subtraction_to_zero_is_canonical() {
        let x = r(2, 3).minus(Rational::from_parts(4, 6));
        assert_eq!(x.into_raw(), (0, 1));
        let y = r(1, 7).minus(r(1, 7));
        assert_eq!(y.into_raw(), (0, 1));
    }

    #[test]
    fn overflow_invalidates() {
        assert!(Rational::from_integer(i64::MAX).plus(Rational::ONE).is_invalid());
        assert!(Rational::from_integer(i64::MIN).minus(Rational::ONE).is_invalid());
        assert!(r(1, u64::MAX).plus(r(1, 2)).is_invalid());
        assert!(Rational::from_integer(i64::MAX).times(Rational::from_integer(2)).is_invalid());
        assert!(r(1, 1 << 32).times(r(1, 1 << 32)).is_invalid());
    }

    #[test]
    fn boundary_results_survive() {
        let x = Rational::from_integer(i64::MIN + 1).minus(Rational::ONE);
        assert_eq!(x.into_raw(), (i64::MIN, 1));
        let y = Rational::from_integer(-(1 << 62)).times(Rational::from_integer(2));
        assert_eq!(y.into_raw(), (i64::MIN, 1));
    }

    #[test]
    fn multiplication() {
        assert_eq!(r(2, 3).times(r(3, 4)).into_raw(), (6, 12));
        assert_eq!(r(-2, 3).times(r(3, 4)).into_raw(), (-6, 12));
        assert_eq!(r(-2, 3).times(r(-3, 4)).into_raw(), (6, 12));
        assert_eq!(Rational::ZERO.times(r(1, u64::MAX)).into_raw(), (0, 1));
    }

    #[test]
    fn division() {
        assert_eq!(r(1, 2).divided_by(r(3, 4)).into_raw(), (4, 6));
        assert_eq!(r(1, 2).divided_by(r(-3, 4)).into_raw(), (-4, 6));
        assert_eq!(r(-1, 2).divided_by(r(-3, 4)).into_raw(), (4, 6));
        assert_eq!(Rational::ZERO.divided_by(r(5, 7)).into_raw(), (0, 1));
    }

    #[test]
    fn division_reaching_min_is_allowed() {
        // -2^62 / (1/2) == -2^63
        let x = Rational::from_integer(-(1 << 62)).divided_by(r(1, 2));
        assert_eq!(x.into_raw(), (i64::MIN, 1));
        let y = Rational::from_integer(1 << 62).divided_by(r(-1, 2));
        assert_eq!(y.into_raw(), (i64::MIN, 1));
        let z = Rational::from_integer(1 << 62).divided_by(r(1, 2));
        assert!(z.is_invalid());
    }

    #[test]
    fn division_by_zero_invalidates() {
        assert!(r(3, 4).divided_by(Rational::ZERO).is_invalid());
        assert!(r(3, 4).divided_by(Rational::from_parts(0, 9)).is_invalid());
        assert!(Rational::ZERO.divided_by(Rational::ZERO).is_invalid());
    }

    #[test]
    fn invalid_is_sticky() {
        let ops: [fn(Rational, Rational) -> Rational; 4] =
            [Rational::plus, Rational::minus, Rational::times, Rational::divided_by];
        for op in ops {
            assert!(op(Rational::INVALID, r(1, 2)).is_invalid());
            assert!(op(r(1, 2), Rational::INVALID).is_invalid());
            assert!(op(Rational::INVALID, Rational::INVALID).is_invalid());
        }
    }

    #[test]
    fn in_place_and_operators_agree() {
        let mut a = r(1, 3);
        a.add_mut(r(1, 6));
        assert_eq!(a, r(1, 3) + r(1, 6));
        let mut b = r(5, 4);
        b -= r(1, 4);
        assert_eq!(b, Rational::ONE);
        let mut c = r(2, 3);
        c *= r(3, 2);
        assert!(c.is_one());
        let mut d = r(2, 3);
        d /= r(2, 3);
        assert!(d.is_one());
        assert_eq!(-r(1, 2), r(-1, 2));
    }

    #[test]
    fn non_mutating_leaves_operand() {
        let a = r(1, 3);
        let _ = a.plus(r(1, 3));
        assert_eq!(a.into_raw(), (1, 3));
    }

    #[test]
    fn reciprocal() {
        assert_eq!(r(-3, 4).reciprocal().into_raw(), (-4, 3));
        assert_eq!(Rational::from_integer(i64::MIN).reciprocal().into_raw(), (-1, 1 << 63));
        assert!(r(1, u64::MAX).reciprocal().is_invalid());
        assert!(Rational::ZERO.reciprocal().is_invalid());
    }
}
