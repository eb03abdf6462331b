//! Montgomery engine.
//!
//! Values are kept as `x·R mod p` with `R = 2^(LIMBS * WORD_BITS)`. Reduction uses the positive
//! inverse `p⁻¹ mod R`:
//!
//! ```text
//! m = (a mod R) · p⁻¹ mod R
//! t = m · p                        // t ≡ a (mod R), so the low halves cancel exactly
//! a·R⁻¹ ≡ (a - t) / R = a_hi - t_hi  (mod p)
//! ```
//!
//! `a_hi - t_hi` lies in `(-p, p)` whenever `a < p·R`, so a single masked add of `p` finishes it.

use crate::{
    descriptor::FieldDescriptor,
    digit::{adc, mask, sbb},
    mul::{mul_lo, mul_wide},
};
use bigint::Word;

/// Montgomery reduction of the double-width value `(lo, hi)`: returns `a·R⁻¹ mod p`.
///
/// Requires `a < p·R`.
#[inline]
pub const fn redc<const LIMBS: usize>(
    lo: &[Word; LIMBS],
    hi: &[Word; LIMBS],
    modulus: &[Word; LIMBS],
    p_inv: &[Word; LIMBS],
) -> [Word; LIMBS] {
    let m = mul_lo(lo, p_inv);
    let (_, t_hi) = mul_wide(&m, modulus);

    let mut r = [0; LIMBS];
    let mut borrow = 0;
    let mut i = 0;
    while i < LIMBS {
        let (w, b) = sbb(hi[i], t_hi[i], borrow);
        r[i] = w;
        borrow = b;
        i += 1;
    }

    let m = mask(borrow);
    let mut carry = 0;
    i = 0;
    while i < LIMBS {
        let (w, c) = adc(r[i], modulus[i] & m, carry);
        r[i] = w;
        carry = c;
        i += 1;
    }
    r
}

/// Montgomery multiplication: `a·b·R⁻¹ mod p`.
#[inline]
pub const fn mont_mul<const LIMBS: usize>(
    a: &[Word; LIMBS],
    b: &[Word; LIMBS],
    modulus: &[Word; LIMBS],
    p_inv: &[Word; LIMBS],
) -> [Word; LIMBS] {
    let (lo, hi) = mul_wide(a, b);
    redc(&lo, &hi, modulus, p_inv)
}

/// Convert a plain value `x < R` into Montgomery form: `x·R mod p`.
#[inline]
pub const fn to_montgomery<const LIMBS: usize>(
    x: &[Word; LIMBS],
    descriptor: &FieldDescriptor<LIMBS>,
) -> [Word; LIMBS] {
    mont_mul(
        x,
        descriptor.r2.as_words(),
        descriptor.modulus.as_words(),
        descriptor.p_inv.as_words(),
    )
}

/// Convert a Montgomery form value back into its canonical residue.
#[inline]
pub const fn from_montgomery<const LIMBS: usize>(
    x: &[Word; LIMBS],
    descriptor: &FieldDescriptor<LIMBS>,
) -> [Word; LIMBS] {
    redc(
        x,
        &[0; LIMBS],
        descriptor.modulus.as_words(),
        descriptor.p_inv.as_words(),
    )
}

#[cfg(test)]
mod tests {
    use super::{from_montgomery, mont_mul, to_montgomery};
    use crate::{descriptor::FieldDescriptor, reduce::reduce};
    use bigint::{NonZero, U256, Uint};
    use proptest::prelude::*;

    const NIST256: FieldDescriptor<{ U256::LIMBS }> = FieldDescriptor::new(&U256::from_be_hex(
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    ));

    #[test]
    fn one_round_trips() {
        let one = to_montgomery(U256::ONE.as_words(), &NIST256);
        assert_eq!(U256::from_words(one), NIST256.one);
        assert_eq!(from_montgomery(&one, &NIST256), U256::ONE.to_words());
    }

    #[test]
    fn r_inv_times_r_is_one() {
        // (R⁻¹·R) as a plain product, reduced: mont_mul(R⁻¹, R²) = R⁻¹·R²·R⁻¹ = 1
        let one = mont_mul(
            NIST256.r_inv.as_words(),
            NIST256.r2.as_words(),
            NIST256.modulus.as_words(),
            NIST256.p_inv.as_words(),
        );
        assert_eq!(one, U256::ONE.to_words());
    }

    proptest! {
        #[test]
        fn montgomery_product_matches_plain_product(
            a in any::<[u8; 32]>(),
            b in any::<[u8; 32]>(),
        ) {
            let d = &NIST256;
            let a = reduce(U256::from_le_slice(&a).as_words(), d);
            let b = reduce(U256::from_le_slice(&b).as_words(), d);
            let product = mont_mul(
                &to_montgomery(&a, d),
                &to_montgomery(&b, d),
                d.modulus.as_words(),
                d.p_inv.as_words(),
            );
            let product = from_montgomery(&product, d);

            let (lo, hi) = U256::from_words(a).mul_wide(&U256::from_words(b));
            let expected = Uint::const_rem_wide((lo, hi), &d.modulus).0;
            prop_assert_eq!(U256::from_words(product), expected);

            let p = NonZero::new(d.modulus).unwrap();
            let round_trip = from_montgomery(&to_montgomery(&a, d), d);
            prop_assert_eq!(U256::from_words(round_trip), U256::from_words(a).rem(&p));
        }
    }
}
