//! Schoolbook multiplication of two `LIMBS`-word operands.
//!
//! Products are accumulated column by column into a three-word accumulator, so each output word
//! is written exactly once. Loop bounds depend only on `LIMBS`.

use crate::digit::{adc, wide_mul};
use bigint::Word;

/// Column accumulator `(v, u, t)`, least significant word first.
#[derive(Clone, Copy)]
struct Column {
    v: Word,
    u: Word,
    t: Word,
}

impl Column {
    const ZERO: Self = Self { v: 0, u: 0, t: 0 };

    #[inline(always)]
    const fn add_product(self, a: Word, b: Word) -> Self {
        let (hi, lo) = wide_mul(a, b);
        let (v, carry) = adc(self.v, lo, 0);
        let (u, carry) = adc(self.u, hi, carry);
        Self {
            v,
            u,
            t: self.t.wrapping_add(carry),
        }
    }

    /// Shift the accumulator one word to the right, discarding the emitted low word.
    #[inline(always)]
    const fn shift(self) -> Self {
        Self {
            v: self.u,
            u: self.t,
            t: 0,
        }
    }
}

/// Full double-width product `a * b`, returned as `(low, high)` halves.
pub const fn mul_wide<const LIMBS: usize>(
    a: &[Word; LIMBS],
    b: &[Word; LIMBS],
) -> ([Word; LIMBS], [Word; LIMBS]) {
    let mut lo = [0; LIMBS];
    let mut hi = [0; LIMBS];
    let mut acc = Column::ZERO;

    let mut k = 0;
    while k < 2 * LIMBS - 1 {
        let mut i = if k < LIMBS { 0 } else { k + 1 - LIMBS };
        while i <= k && i < LIMBS {
            acc = acc.add_product(a[i], b[k - i]);
            i += 1;
        }

        if k < LIMBS {
            lo[k] = acc.v;
        } else {
            hi[k - LIMBS] = acc.v;
        }

        acc = acc.shift();
        k += 1;
    }

    // Final carry word.
    hi[LIMBS - 1] = acc.v;
    (lo, hi)
}

/// Low half of the product: `a * b mod 2^(LIMBS * WORD_BITS)`.
pub const fn mul_lo<const LIMBS: usize>(a: &[Word; LIMBS], b: &[Word; LIMBS]) -> [Word; LIMBS] {
    let mut lo = [0; LIMBS];
    let mut acc = Column::ZERO;

    let mut k = 0;
    while k < LIMBS {
        let mut i = 0;
        while i <= k {
            acc = acc.add_product(a[i], b[k - i]);
            i += 1;
        }
        lo[k] = acc.v;
        acc = acc.shift();
        k += 1;
    }

    lo
}
