//! Constant-time comparison and selection over word arrays.
//!
//! Results are plain `0`/`1` words so they can feed [`mask`](crate::digit::mask) directly; the
//! field element layer wraps them in [`subtle::Choice`].

use crate::digit::{WORD_BITS, mask};
use bigint::Word;

/// Returns `1` if `a != b`, otherwise `0`. Always inspects every word.
#[inline]
pub const fn not_equals<const LIMBS: usize>(a: &[Word; LIMBS], b: &[Word; LIMBS]) -> Word {
    let mut acc = 0;
    let mut i = 0;
    while i < LIMBS {
        acc |= a[i] ^ b[i];
        i += 1;
    }

    // Top bit of `acc | -acc` is set iff `acc` is nonzero.
    (acc | acc.wrapping_neg()) >> (WORD_BITS - 1)
}

/// Returns `1` if `a == b`, otherwise `0`.
#[inline]
pub const fn equals<const LIMBS: usize>(a: &[Word; LIMBS], b: &[Word; LIMBS]) -> Word {
    not_equals(a, b) ^ 1
}

/// Returns `a` when `condition == 0` and `b` when `condition == 1`.
#[inline]
pub const fn select<const LIMBS: usize>(
    a: &[Word; LIMBS],
    b: &[Word; LIMBS],
    condition: Word,
) -> [Word; LIMBS] {
    let m = mask(condition);
    let mut c = [0; LIMBS];
    let mut i = 0;
    while i < LIMBS {
        c[i] = a[i] ^ ((a[i] ^ b[i]) & m);
        i += 1;
    }
    c
}

#[cfg(test)]
mod tests {
    use super::{equals, not_equals, select};
    use bigint::Word;

    #[test]
    fn equality() {
        let a: [Word; 3] = [1, 2, 3];
        let b: [Word; 3] = [1, 2, 4];
        assert_eq!(equals(&a, &a), 1);
        assert_eq!(not_equals(&a, &a), 0);
        assert_eq!(equals(&a, &b), 0);
        assert_eq!(not_equals(&a, &b), 1);
    }

    #[test]
    fn difference_in_top_bit() {
        let a: [Word; 2] = [0, 0];
        let b: [Word; 2] = [0, 1 << (Word::BITS - 1)];
        assert_eq!(not_equals(&a, &b), 1);
    }

    #[test]
    fn selection() {
        let a: [Word; 2] = [Word::MAX, 0];
        let b: [Word; 2] = [0, 7];
        assert_eq!(select(&a, &b, 0), a);
        assert_eq!(select(&a, &b, 1), b);
    }
}
