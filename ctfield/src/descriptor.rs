//! Per-modulus constants, derived entirely at compile time from the modulus.

use crate::{digit::WORD_BITS, monty};
use bigint::{Uint, Word};

/// Strategy used by [`reduce`](crate::reduce::reduce) to bring a raw value below `p`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reduction<const LIMBS: usize> {
    /// `R <= 2p`: every raw value is below `2p`, so one trial subtraction suffices.
    TrialSubtract,

    /// `p = 2^k - c` with `R > 2p`: fold the bits above `k` back in as multiples of `c`.
    Fold {
        /// Bit length of the modulus.
        k: u32,
        /// `2^k - p`.
        c: Uint<LIMBS>,
    },
}

/// Constants describing one prime field.
///
/// All fields are mutually consistent by construction: build one with
/// [`FieldDescriptor::new`] in a `const` context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDescriptor<const LIMBS: usize> {
    /// The prime modulus `p`.
    pub modulus: Uint<LIMBS>,

    /// Bit length of `p`.
    pub bits: u32,

    /// `R mod p`: the multiplicative identity in Montgomery form.
    pub one: Uint<LIMBS>,

    /// Additive identity.
    pub zero: Uint<LIMBS>,

    /// `p - (R mod p)`: minus one in Montgomery form.
    pub minus_one: Uint<LIMBS>,

    /// `R² mod p`.
    pub r2: Uint<LIMBS>,

    /// `R⁻¹ mod p`.
    pub r_inv: Uint<LIMBS>,

    /// `p⁻¹ mod R`.
    pub p_inv: Uint<LIMBS>,

    /// `-p⁻¹ mod R`.
    pub p_neg_inv: Uint<LIMBS>,

    /// Reduction strategy for raw values below `R`.
    pub reduction: Reduction<LIMBS>,

    /// Bit position which is set in [`Self::minus_one`] and clear in [`Self::one`].
    pub legendre_bit: u32,
}

impl<const LIMBS: usize> FieldDescriptor<LIMBS> {
    /// Derive every constant for the given modulus.
    ///
    /// # Panics
    ///
    /// - if the modulus is even
    /// - if the modulus leaves the top word empty
    /// - if a pseudo-Mersenne fold cannot be done in a single pass
    pub const fn new(modulus: &Uint<LIMBS>) -> Self {
        let width = (LIMBS as u32) * WORD_BITS;
        let bits = modulus.bits() as u32;

        assert!(modulus.as_words()[0] & 1 == 1, "modulus must be odd");
        assert!(bits > width - WORD_BITS, "modulus must occupy the top word");

        let one = Uint::MAX.const_rem(modulus).0.wrapping_add(&Uint::ONE);
        let r2 = Uint::const_rem_wide(one.square_wide(), modulus).0;
        let p_inv = modulus.inv_mod2k_vartime(width as usize);
        let p_neg_inv = p_inv.wrapping_neg();
        let r_inv = Uint::from_words(monty::redc(
            Uint::<LIMBS>::ONE.as_words(),
            &[0; LIMBS],
            modulus.as_words(),
            p_inv.as_words(),
        ));
        let minus_one = modulus.wrapping_sub(&one);

        let reduction = if bits == width {
            Reduction::TrialSubtract
        } else {
            let c = Uint::ONE.shl_vartime(bits as usize).wrapping_sub(modulus);

            // (2^(W-k) + 1)·c < 2^(c_bits + W - k + 1) <= 2^k keeps the fold below 2p.
            assert!(
                (c.bits() as u32) + (width - bits) + 1 <= bits,
                "modulus is not a foldable pseudo-Mersenne prime"
            );
            Reduction::Fold { k: bits, c }
        };

        Self {
            modulus: *modulus,
            bits,
            one,
            zero: Uint::ZERO,
            minus_one,
            r2,
            r_inv,
            p_inv,
            p_neg_inv,
            reduction,
            legendre_bit: legendre_bit(&minus_one, &one),
        }
    }
}

/// Lowest bit distinguishing `-1` from `1` in Montgomery form.
const fn legendre_bit<const LIMBS: usize>(minus_one: &Uint<LIMBS>, one: &Uint<LIMBS>) -> u32 {
    let distinct = minus_one.bitand(&one.not());
    let words = distinct.as_words();

    let mut i = 0;
    while i < LIMBS {
        let w: Word = words[i];
        if w != 0 {
            return (i as u32) * WORD_BITS + w.trailing_zeros();
        }
        i += 1;
    }

    panic!("no bit distinguishes -1 from 1 in Montgomery form")
}

#[cfg(test)]
mod tests {
    use super::{FieldDescriptor, Reduction};
    use bigint::{U64, U128, U256, U512};

    #[test]
    fn mersenne61_constants() {
        let d = FieldDescriptor::new(&U64::from_be_hex("1fffffffffffffff"));
        assert_eq!(d.bits, 61);
        assert_eq!(d.one, U64::from_u64(8));
        assert_eq!(d.r2, U64::from_u64(0x40));
        assert_eq!(d.r_inv, U64::from_u64(0x0400000000000000));
        assert_eq!(d.p_neg_inv, U64::from_u64(0x2000000000000001));
        assert_eq!(d.p_inv, U64::from_u64(0xDFFFFFFFFFFFFFFF));
        assert_eq!(d.legendre_bit, 0);
        assert_eq!(d.reduction, Reduction::Fold { k: 61, c: U64::ONE });
    }

    #[test]
    fn pm64_constants() {
        let d = FieldDescriptor::new(&U64::from_be_hex("ffffffffffffffc5"));
        assert_eq!(d.one, U64::from_u64(0x3B));
        assert_eq!(d.r2, U64::from_u64(0xD99));
        assert_eq!(d.r_inv, U64::from_u64(0xCBEEA4E1A08AD8C4));
        assert_eq!(d.p_neg_inv, U64::from_u64(0xCBEEA4E1A08AD8F3));
        assert_eq!(d.p_inv, U64::from_u64(0x34115B1E5F75270D));
        assert_eq!(d.legendre_bit, 7);
        assert_eq!(d.reduction, Reduction::TrialSubtract);
    }

    #[test]
    fn inverse_constants_are_consistent() {
        let d = FieldDescriptor::new(&U128::from_be_hex("ffffffffffffffffffffffffffffff53"));
        assert_eq!(d.p_inv.wrapping_mul(&d.modulus), U128::ONE);
        assert_eq!(d.p_inv.wrapping_add(&d.p_neg_inv), U128::ZERO);
        assert_eq!(d.modulus.wrapping_sub(&d.one), d.minus_one);
    }

    #[test]
    fn large_fold_constant() {
        // 2^511 - 2^320 + 1: c = 2^320 - 1 spans several words
        let d = FieldDescriptor::new(&U512::from_be_hex(concat!(
            "7fffffffffffffffffffffffffffffffffffffffffffffff0000000000000000",
            "0000000000000000000000000000000000000000000000000000000000000001"
        )));
        match d.reduction {
            Reduction::Fold { k, c } => {
                assert_eq!(k, 511);
                assert_eq!(c.bits(), 320);
            }
            Reduction::TrialSubtract => panic!("expected fold"),
        }
    }

    #[test]
    fn nist_p256_legendre_bit() {
        let d = FieldDescriptor::new(&U256::from_be_hex(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        ));
        assert_eq!(d.reduction, Reduction::TrialSubtract);
        assert_eq!(d.legendre_bit, 1);
    }
}
