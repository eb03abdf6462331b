//! Reference backend built on the word-level engine in this crate.

use super::Backend;
use crate::{descriptor::FieldDescriptor, monty, reduce};
use bigint::Uint;

/// Portable backend: schoolbook multiply, `p⁻¹`-based Montgomery reduction and masked
/// conditional corrections.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Portable;

impl<const LIMBS: usize> Backend<LIMBS> for Portable {
    #[inline]
    fn add(a: &Uint<LIMBS>, b: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        Uint::from_words(reduce::add_mod(
            a.as_words(),
            b.as_words(),
            descriptor.modulus.as_words(),
        ))
    }

    #[inline]
    fn sub(a: &Uint<LIMBS>, b: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        Uint::from_words(reduce::sub_mod(
            a.as_words(),
            b.as_words(),
            descriptor.modulus.as_words(),
        ))
    }

    #[inline]
    fn neg(a: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        Uint::from_words(reduce::neg_mod(a.as_words(), descriptor.modulus.as_words()))
    }

    #[inline]
    fn mul(a: &Uint<LIMBS>, b: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        Uint::from_words(monty::mont_mul(
            a.as_words(),
            b.as_words(),
            descriptor.modulus.as_words(),
            descriptor.p_inv.as_words(),
        ))
    }
}
