//! Backend delegating to `crypto-bigint`'s modular arithmetic.

use super::Backend;
use crate::descriptor::FieldDescriptor;
use bigint::{Limb, Uint, modular::montgomery_reduction};

/// Generic backend on top of `crypto-bigint`: `add_mod`/`sub_mod`/`neg_mod` plus word-by-word
/// Montgomery reduction with `-p⁻¹ mod 2^w`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Bigint;

impl Bigint {
    #[inline]
    fn mod_neg_inv<const LIMBS: usize>(descriptor: &FieldDescriptor<LIMBS>) -> Limb {
        descriptor.p_neg_inv.as_limbs()[0]
    }
}

impl<const LIMBS: usize> Backend<LIMBS> for Bigint {
    #[inline]
    fn add(a: &Uint<LIMBS>, b: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        a.add_mod(b, &descriptor.modulus)
    }

    #[inline]
    fn sub(a: &Uint<LIMBS>, b: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        a.sub_mod(b, &descriptor.modulus)
    }

    #[inline]
    fn neg(a: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        a.neg_mod(&descriptor.modulus)
    }

    #[inline]
    fn mul(a: &Uint<LIMBS>, b: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        montgomery_reduction(
            &a.mul_wide(b),
            &descriptor.modulus,
            Self::mod_neg_inv(descriptor),
        )
    }

    #[inline]
    fn square(a: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        montgomery_reduction(
            &a.square_wide(),
            &descriptor.modulus,
            Self::mod_neg_inv(descriptor),
        )
    }
}
