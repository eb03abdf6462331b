//! 64-bit NIST P-256 field algorithms.

use ctfield::{
    Backend, FieldDescriptor,
    bigint::{U256, Word},
    digit::{adc, mac, mask, sbb},
};

const MODULUS: [Word; 4] = [
    0xffff_ffff_ffff_ffff,
    0x0000_0000_ffff_ffff,
    0x0000_0000_0000_0000,
    0xffff_ffff_0000_0001,
];

/// Backend specialized to the NIST P-256 prime on 64-bit targets.
///
/// Only valid for that one modulus: the descriptor argument is not consulted outside of debug
/// assertions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Nist64;

impl Backend<{ U256::LIMBS }> for Nist64 {
    #[inline]
    fn add(a: &U256, b: &U256, descriptor: &FieldDescriptor<{ U256::LIMBS }>) -> U256 {
        debug_assert_eq!(descriptor.modulus.as_words(), &MODULUS);
        let a = a.as_words();
        let b = b.as_words();

        // Bit 256 of p is set, so addition can result in five words.
        let (w0, carry) = adc(a[0], b[0], 0);
        let (w1, carry) = adc(a[1], b[1], carry);
        let (w2, carry) = adc(a[2], b[2], carry);
        let (w3, w4) = adc(a[3], b[3], carry);

        // Attempt to subtract the modulus, to ensure the result is in the field
        U256::from_words(sub_inner(
            [w0, w1, w2, w3, w4],
            [MODULUS[0], MODULUS[1], MODULUS[2], MODULUS[3], 0],
        ))
    }

    #[inline]
    fn sub(a: &U256, b: &U256, descriptor: &FieldDescriptor<{ U256::LIMBS }>) -> U256 {
        debug_assert_eq!(descriptor.modulus.as_words(), &MODULUS);
        let a = a.as_words();
        let b = b.as_words();

        U256::from_words(sub_inner(
            [a[0], a[1], a[2], a[3], 0],
            [b[0], b[1], b[2], b[3], 0],
        ))
    }

    #[inline]
    fn neg(a: &U256, descriptor: &FieldDescriptor<{ U256::LIMBS }>) -> U256 {
        Self::sub(&U256::ZERO, a, descriptor)
    }

    #[inline]
    fn mul(a: &U256, b: &U256, descriptor: &FieldDescriptor<{ U256::LIMBS }>) -> U256 {
        debug_assert_eq!(descriptor.modulus.as_words(), &MODULUS);
        let (lo, hi) = a.mul_wide(b);
        montgomery_reduce(&lo, &hi)
    }

    #[inline]
    fn square(a: &U256, descriptor: &FieldDescriptor<{ U256::LIMBS }>) -> U256 {
        debug_assert_eq!(descriptor.modulus.as_words(), &MODULUS);
        let (lo, hi) = a.square_wide();
        montgomery_reduce(&lo, &hi)
    }
}

/// Montgomery Reduction
///
/// The general algorithm is:
/// ```text
/// A <- input (2n b-limbs)
/// for i in 0..n {
///     k <- A[i] p' mod b
///     A <- A + k p b^i
/// }
/// A <- A / b^n
/// if A >= p {
///     A <- A - p
/// }
/// ```
///
/// For this prime with 64-bit words:
///
/// - `p'` is 1, so the multiplicand is simply limb `i` of the intermediate A.
///
/// - The first limb of p is 2^64 - 1. Adding `a_i * (2^64 - 1)` to `a_i` clears the limb and
///   carries `a_i` into the next one, so the carry is initialized to `a_i`.
///
/// - The third limb of p is zero, so that product reduces to propagating the carry.
///
/// References:
/// - Handbook of Applied Cryptography, Chapter 14
///   Algorithm 14.32
///   http://cacr.uwaterloo.ca/hac/about/chap14.pdf
#[inline]
const fn montgomery_reduce(lo: &U256, hi: &U256) -> U256 {
    let lo = lo.as_words();
    let hi = hi.as_words();

    let (a0, a1, a2, a3) = (lo[0], lo[1], lo[2], lo[3]);
    let (a4, a5, a6, a7) = (hi[0], hi[1], hi[2], hi[3]);

    let (a1, carry) = mac(a1, a0, MODULUS[1], a0);
    let (a2, carry) = adc(a2, 0, carry);
    let (a3, carry) = mac(a3, a0, MODULUS[3], carry);
    let (a4, carry2) = adc(a4, 0, carry);

    let (a2, carry) = mac(a2, a1, MODULUS[1], a1);
    let (a3, carry) = adc(a3, 0, carry);
    let (a4, carry) = mac(a4, a1, MODULUS[3], carry);
    let (a5, carry2) = adc(a5, carry2, carry);

    let (a3, carry) = mac(a3, a2, MODULUS[1], a2);
    let (a4, carry) = adc(a4, 0, carry);
    let (a5, carry) = mac(a5, a2, MODULUS[3], carry);
    let (a6, carry2) = adc(a6, carry2, carry);

    let (a4, carry) = mac(a4, a3, MODULUS[1], a3);
    let (a5, carry) = adc(a5, 0, carry);
    let (a6, carry) = mac(a6, a3, MODULUS[3], carry);
    let (a7, a8) = adc(a7, carry2, carry);

    // Result may be within MODULUS of the correct value
    U256::from_words(sub_inner(
        [a4, a5, a6, a7, a8],
        [MODULUS[0], MODULUS[1], MODULUS[2], MODULUS[3], 0],
    ))
}

/// `l - r`, with `p` added back when the subtraction borrows out of the top word.
#[inline]
const fn sub_inner(l: [Word; 5], r: [Word; 5]) -> [Word; 4] {
    let (w0, borrow) = sbb(l[0], r[0], 0);
    let (w1, borrow) = sbb(l[1], r[1], borrow);
    let (w2, borrow) = sbb(l[2], r[2], borrow);
    let (w3, borrow) = sbb(l[3], r[3], borrow);
    let (_, borrow) = sbb(l[4], r[4], borrow);

    let m = mask(borrow);
    let (w0, carry) = adc(w0, MODULUS[0] & m, 0);
    let (w1, carry) = adc(w1, MODULUS[1] & m, carry);
    let (w2, carry) = adc(w2, MODULUS[2] & m, carry);
    let (w3, _) = adc(w3, MODULUS[3] & m, carry);

    [w0, w1, w2, w3]
}

#[cfg(test)]
mod tests {
    use super::{MODULUS, Nist64, montgomery_reduce};
    use crate::Fp256Params;
    use ctfield::{Backend, FieldParams, bigint::U256};

    #[test]
    fn modulus_matches_descriptor() {
        assert_eq!(Fp256Params::DESCRIPTOR.modulus.as_words(), &MODULUS);
    }

    #[test]
    fn reduce_r2_is_one() {
        // R² · R⁻¹ = R, i.e. one in Montgomery form
        let d = Fp256Params::DESCRIPTOR;
        assert_eq!(montgomery_reduce(&d.r2, &U256::ZERO), d.one);
    }

    #[test]
    fn add_wraps_past_modulus() {
        let d = Fp256Params::DESCRIPTOR;
        let sum = Nist64::add(&d.minus_one, &d.one, &d);
        assert_eq!(sum, U256::ZERO);
        assert_eq!(Nist64::neg(&U256::ZERO, &d), U256::ZERO);
    }
}
