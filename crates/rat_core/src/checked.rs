//! crates/rat_core/src/checked.rs
//! Overflow-safe 64-bit primitives and the 128-bit wide product.
//!
//! Every helper decides *before* computing whether the result leaves the
//! target range, and computes at most once. The asymmetric `i64::MIN` case is
//! handled here and nowhere else: callers go through [`magnitude`] and
//! [`with_sign`] instead of negating by hand.

/// Magnitude of `i64::MIN` (one past `i64::MAX`).
pub const MIN_MAGNITUDE: u64 = 1 << 63;

/* --------------------------------- Signs ---------------------------------- */

/// Unsigned magnitude of a signed value; `i64::MIN` maps to `2^63`.
#[inline]
pub fn magnitude(x: i64) -> u64 {
    if x == i64::MIN {
        MIN_MAGNITUDE
    } else if x < 0 {
        (-x) as u64
    } else {
        x as u64
    }
}

/// Largest magnitude a result of the given sign may carry.
#[inline]
pub fn magnitude_limit(negative: bool) -> u64 {
    if negative { MIN_MAGNITUDE } else { MIN_MAGNITUDE - 1 }
}

/// Re-apply a sign to a magnitude. `2^63` is accepted only for a negative
/// result; anything larger is out of range.
#[inline]
pub fn with_sign(mag: u64, negative: bool) -> Option<i64> {
    if mag > magnitude_limit(negative) {
        return None;
    }
    if !negative {
        Some(mag as i64)
    } else if mag == MIN_MAGNITUDE {
        Some(i64::MIN)
    } else {
        Some(-(mag as i64))
    }
}

/* ------------------------------ Wide product ------------------------------ */

/// Full 128-bit product of two `u64`, split in halves.
///
/// Field order makes the derived `Ord` lexicographic: high half first, then
/// low half, which is exactly the numeric order of the 128-bit value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wide {
    pub hi: u64,
    pub lo: u64,
}

impl Wide {
    /// `Some(lo)` when the product fits in 64 bits.
    #[inline]
    pub fn narrow(self) -> Option<u64> {
        if self.hi == 0 { Some(self.lo) } else { None }
    }
}

#[inline]
pub fn wide_mul(a: u64, b: u64) -> Wide {
    let p = (a as u128) * (b as u128);
    Wide { hi: (p >> 64) as u64, lo: p as u64 }
}

/* ------------------------- Overflow predicates ---------------------------- */

#[inline]
pub fn add_overflows_i64(a: i64, b: i64) -> bool {
    if b > 0 { a > i64::MAX - b } else { a < i64::MIN - b }
}

#[inline]
pub fn sub_overflows_i64(a: i64, b: i64) -> bool {
    if b < 0 { a > i64::MAX + b } else { a < i64::MIN + b }
}

/// Signed product classified from the wide product of the magnitudes.
#[inline]
pub fn mul_overflows_i64(a: i64, b: i64) -> bool {
    let negative = (a < 0) != (b < 0);
    let w = wide_mul(magnitude(a), magnitude(b));
    w.hi != 0 || w.lo > magnitude_limit(negative)
}

#[inline]
pub fn add_overflows_u64(a: u64, b: u64) -> bool {
    a > u64::MAX - b
}

#[inline]
pub fn sub_overflows_u64(a: u64, b: u64) -> bool {
    b > a
}

#[inline]
pub fn mul_overflows_u64(a: u64, b: u64) -> bool {
    wide_mul(a, b).hi != 0
}

/* --------------------------- Checked operations --------------------------- */

#[inline]
pub fn add_i64(a: i64, b: i64) -> Option<i64> {
    if add_overflows_i64(a, b) { None } else { Some(a + b) }
}

#[inline]
pub fn sub_i64(a: i64, b: i64) -> Option<i64> {
    if sub_overflows_i64(a, b) { None } else { Some(a - b) }
}

/// Signed × signed, computed once through the wide product.
#[inline]
pub fn mul_i64(a: i64, b: i64) -> Option<i64> {
    let negative = (a < 0) != (b < 0);
    let w = wide_mul(magnitude(a), magnitude(b));
    with_sign(w.narrow()?, negative)
}

/// Signed × unsigned (numerator times a denominator).
#[inline]
pub fn mul_i64_u64(a: i64, b: u64) -> Option<i64> {
    let w = wide_mul(magnitude(a), b);
    with_sign(w.narrow()?, a < 0)
}

#[inline]
pub fn add_u64(a: u64, b: u64) -> Option<u64> {
    if add_overflows_u64(a, b) { None } else { Some(a + b) }
}

#[inline]
pub fn sub_u64(a: u64, b: u64) -> Option<u64> {
    if sub_overflows_u64(a, b) { None } else { Some(a - b) }
}

#[inline]
pub fn mul_u64(a: u64, b: u64) -> Option<u64> {
    wide_mul(a, b).narrow()
}

/* ---------------------------------- Tests --------------------------------- */
