//! Reduction engine: canonicalization into `[0, p)` and the masked modular add/sub built on it.
//!
//! Two strategies are used, chosen per modulus by [`Reduction`]:
//!
//! - trial subtraction: subtract `p`, then add it back under a mask derived from the borrow.
//!   Valid for inputs below `2p`, which covers every raw value when `R <= 2p`.
//! - pseudo-Mersenne fold for `p = 2^k - c`: the bits above `k` are multiplied by `c` and added
//!   back into the low part, followed by one trial subtraction.
//!
//! Neither strategy branches on the value being reduced.

use crate::{
    descriptor::{FieldDescriptor, Reduction},
    digit::{WORD_BITS, adc, mac, mask, sbb},
};
use bigint::Word;

/// Reduce a raw value `x < R` into `[0, p)`.
#[inline]
pub const fn reduce<const LIMBS: usize>(
    x: &[Word; LIMBS],
    descriptor: &FieldDescriptor<LIMBS>,
) -> [Word; LIMBS] {
    let p = descriptor.modulus.as_words();
    match &descriptor.reduction {
        Reduction::TrialSubtract => sub_p_masked(x, 0, p),
        Reduction::Fold { k, c } => fold(x, *k, c.as_words(), p),
    }
}

/// Given the `LIMBS + 1` word value `(carry, x) < 2p`, return it modulo `p`.
#[inline]
pub const fn sub_p_masked<const LIMBS: usize>(
    x: &[Word; LIMBS],
    carry: Word,
    p: &[Word; LIMBS],
) -> [Word; LIMBS] {
    let (d, borrow) = sub_words(x, p);
    let (_, borrow) = sbb(carry, 0, borrow);

    // A borrow out of the top word means `(carry, x) < p`: add `p` back.
    add_masked(&d, p, mask(borrow))
}

/// Compute `(a + b) mod p` for canonical `a` and `b`.
#[inline]
pub const fn add_mod<const LIMBS: usize>(
    a: &[Word; LIMBS],
    b: &[Word; LIMBS],
    p: &[Word; LIMBS],
) -> [Word; LIMBS] {
    let mut sum = [0; LIMBS];
    let mut carry = 0;
    let mut i = 0;
    while i < LIMBS {
        let (w, c) = adc(a[i], b[i], carry);
        sum[i] = w;
        carry = c;
        i += 1;
    }

    sub_p_masked(&sum, carry, p)
}

/// Compute `(a - b) mod p` for canonical `a` and `b`.
#[inline]
pub const fn sub_mod<const LIMBS: usize>(
    a: &[Word; LIMBS],
    b: &[Word; LIMBS],
    p: &[Word; LIMBS],
) -> [Word; LIMBS] {
    let (d, borrow) = sub_words(a, b);
    add_masked(&d, p, mask(borrow))
}

/// Compute `-a mod p` for canonical `a`. Zero maps to zero.
#[inline]
pub const fn neg_mod<const LIMBS: usize>(a: &[Word; LIMBS], p: &[Word; LIMBS]) -> [Word; LIMBS] {
    sub_mod(&[0; LIMBS], a, p)
}

/// Returns `1` if `x < p`, otherwise `0`.
#[inline]
pub const fn is_less<const LIMBS: usize>(x: &[Word; LIMBS], p: &[Word; LIMBS]) -> Word {
    sub_words(x, p).1
}

/// Pseudo-Mersenne fold for `p = 2^k - c`, where `2^k ≡ c (mod p)`.
const fn fold<const LIMBS: usize>(
    x: &[Word; LIMBS],
    k: u32,
    c: &[Word; LIMBS],
    p: &[Word; LIMBS],
) -> [Word; LIMBS] {
    let top = LIMBS - 1;
    let shift = k - (top as u32) * WORD_BITS;

    let hi = x[top] >> shift;
    let mut lo = *x;
    lo[top] &= ((1 as Word) << shift) - 1;

    let mut carry = 0;
    let mut i = 0;
    while i < LIMBS {
        let (w, c) = mac(lo[i], hi, c[i], carry);
        lo[i] = w;
        carry = c;
        i += 1;
    }

    // The descriptor guarantees `lo + hi * c < 2p`.
    sub_p_masked(&lo, carry, p)
}

#[inline(always)]
const fn sub_words<const LIMBS: usize>(
    a: &[Word; LIMBS],
    b: &[Word; LIMBS],
) -> ([Word; LIMBS], Word) {
    let mut d = [0; LIMBS];
    let mut borrow = 0;
    let mut i = 0;
    while i < LIMBS {
        let (w, b) = sbb(a[i], b[i], borrow);
        d[i] = w;
        borrow = b;
        i += 1;
    }
    (d, borrow)
}

#[inline(always)]
const fn add_masked<const LIMBS: usize>(
    x: &[Word; LIMBS],
    p: &[Word; LIMBS],
    mask: Word,
) -> [Word; LIMBS] {
    let mut r = [0; LIMBS];
    let mut carry = 0;
    let mut i = 0;
    while i < LIMBS {
        let (w, c) = adc(x[i], p[i] & mask, carry);
        r[i] = w;
        carry = c;
        i += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::{add_mod, is_less, neg_mod, reduce, sub_mod};
    use crate::descriptor::{FieldDescriptor, Reduction};
    use bigint::{NonZero, U64, U256, Uint};
    use proptest::prelude::*;

    const MERSENNE61: FieldDescriptor<{ U64::LIMBS }> =
        FieldDescriptor::new(&U64::from_be_hex("1fffffffffffffff"));
    const PM64: FieldDescriptor<{ U64::LIMBS }> =
        FieldDescriptor::new(&U64::from_be_hex("ffffffffffffffc5"));
    const CURVE25519: FieldDescriptor<{ U256::LIMBS }> = FieldDescriptor::new(&U256::from_be_hex(
        "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
    ));
    const NIST256: FieldDescriptor<{ U256::LIMBS }> = FieldDescriptor::new(&U256::from_be_hex(
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    ));

    fn reduce_uint<const LIMBS: usize>(x: &Uint<LIMBS>, d: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        Uint::from_words(reduce(x.as_words(), d))
    }

    fn check_boundaries<const LIMBS: usize>(d: &FieldDescriptor<LIMBS>) {
        let p = d.modulus;
        assert_eq!(reduce_uint(&Uint::ZERO, d), Uint::ZERO);
        assert_eq!(reduce_uint(&p, d), Uint::ZERO);
        assert_eq!(
            reduce_uint(&p.wrapping_sub(&Uint::ONE), d),
            p.wrapping_sub(&Uint::ONE)
        );
        assert_eq!(reduce_uint(&p.wrapping_add(&Uint::ONE), d), Uint::ONE);
        assert_eq!(reduce_uint(&Uint::MAX, d), d.one.wrapping_sub(&Uint::ONE));
    }

    #[test]
    fn mersenne61_vectors() {
        let reduction = MERSENNE61.reduction;
        assert!(matches!(reduction, Reduction::Fold { k: 61, .. }));
        assert_eq!(
            reduce_uint(&U64::from_u64(0x1fff_ffff_ffff_ffff), &MERSENNE61),
            U64::ZERO
        );
        assert_eq!(reduce_uint(&U64::MAX, &MERSENNE61), U64::from_u64(7));
        check_boundaries(&MERSENNE61);
    }

    #[test]
    fn trial_subtract_boundaries() {
        assert!(matches!(PM64.reduction, Reduction::TrialSubtract));
        assert!(matches!(NIST256.reduction, Reduction::TrialSubtract));
        check_boundaries(&PM64);
        check_boundaries(&NIST256);
    }

    #[test]
    fn fold_boundaries() {
        let reduction = CURVE25519.reduction;
        assert!(matches!(reduction, Reduction::Fold { k: 255, .. }));
        check_boundaries(&CURVE25519);
    }

    #[test]
    fn neg_zero_is_zero() {
        let p = CURVE25519.modulus;
        assert_eq!(
            neg_mod(U256::ZERO.as_words(), p.as_words()),
            [0; U256::LIMBS]
        );
    }

    proptest! {
        #[test]
        fn reduce_is_idempotent_and_congruent(bytes in any::<[u8; 32]>()) {
            for d in [&CURVE25519, &NIST256] {
                let x = U256::from_le_slice(&bytes);
                let r = reduce_uint(&x, d);
                prop_assert_eq!(reduce_uint(&r, d), r);
                prop_assert_eq!(is_less(r.as_words(), d.modulus.as_words()), 1);
                let p = NonZero::new(d.modulus).unwrap();
                prop_assert_eq!(r, x.rem(&p));
            }
        }

        #[test]
        fn add_sub_are_inverse(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            for d in [&CURVE25519, &NIST256] {
                let p = d.modulus.as_words();
                let a = reduce(U256::from_le_slice(&a).as_words(), d);
                let b = reduce(U256::from_le_slice(&b).as_words(), d);
                let sum = add_mod(&a, &b, p);
                prop_assert_eq!(sub_mod(&sum, &b, p), a);
                prop_assert_eq!(add_mod(&a, &neg_mod(&a, p), p), [0; U256::LIMBS]);
            }
        }
    }
}
