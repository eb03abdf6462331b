//! Field elements tagged by their parameter type and stored in Montgomery form.

mod quadratic;
mod random;
mod sqrt;

pub use self::sqrt::{SQRT_MAX_ATTEMPTS, SqrtStrategy};

use crate::{
    backend::Backend,
    chain::{self, Chain, ChainElement},
    ct,
    descriptor::FieldDescriptor,
    monty, reduce,
};
use bigint::{Uint, Word};
use core::{
    fmt,
    iter::{Product, Sum},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Compile-time description of a prime field.
///
/// Implement this with the [`field_params!`](crate::field_params) macro, which derives the
/// descriptor from the modulus and checks the chains.
pub trait FieldParams<const LIMBS: usize>:
    Copy + fmt::Debug + Default + Eq + Send + Sync + 'static
{
    /// Implementation of the hot field operations.
    type Backend: Backend<LIMBS>;

    /// Field modulus as a big endian hexadecimal string.
    const MODULUS_HEX: &'static str;

    /// Constants derived from the modulus.
    const DESCRIPTOR: FieldDescriptor<LIMBS>;

    /// Chain computing `a^(p - 2)`.
    const INVERT: Chain;

    /// Chain computing `a^((p - 1) / 2)`.
    const LEGENDRE: Chain;

    /// Square root method and its chain.
    const SQRT: SqrtStrategy<LIMBS>;
}

/// Element of the prime field described by `P`, in Montgomery form.
#[derive(Clone, Copy)]
pub struct FieldElement<P, const LIMBS: usize>
where
    P: FieldParams<LIMBS>,
{
    montgomery: Uint<LIMBS>,
    params: PhantomData<P>,
}

impl<P, const LIMBS: usize> FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    /// Zero element (additive identity).
    pub const ZERO: Self = Self::from_montgomery(P::DESCRIPTOR.zero);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_montgomery(P::DESCRIPTOR.one);

    /// Additive inverse of [`Self::ONE`].
    pub const MINUS_ONE: Self = Self::from_montgomery(P::DESCRIPTOR.minus_one);

    /// The prime modulus `p`.
    pub const MODULUS: Uint<LIMBS> = P::DESCRIPTOR.modulus;

    /// Number of limbs used by the internal integer representation.
    pub const LIMBS: usize = LIMBS;

    /// Reduce a raw integer into `[0, p)` using the modulus' reduction strategy.
    ///
    /// This is the plain reduction step, no Montgomery conversion takes place.
    #[inline]
    pub const fn reduce(uint: &Uint<LIMBS>) -> Uint<LIMBS> {
        Uint::from_words(reduce::reduce(uint.as_words(), &P::DESCRIPTOR))
    }

    /// Convert [`Uint`] into a field element, reducing it modulo `p` and converting it into
    /// Montgomery form:
    ///
    /// ```text
    /// w * R^2 * R^-1 mod p = wR mod p
    /// ```
    #[inline]
    pub const fn from_uint_reduced(uint: &Uint<LIMBS>) -> Self {
        let reduced = reduce::reduce(uint.as_words(), &P::DESCRIPTOR);
        Self::from_montgomery(Uint::from_words(monty::to_montgomery(
            &reduced,
            &P::DESCRIPTOR,
        )))
    }

    /// Convert a canonical [`Uint`] into a field element.
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if the input overflows the modulus.
    #[inline]
    pub fn from_uint(uint: &Uint<LIMBS>) -> CtOption<Self> {
        let is_some = reduce::is_less(uint.as_words(), P::DESCRIPTOR.modulus.as_words());
        CtOption::new(Self::from_uint_reduced(uint), Choice::from(is_some as u8))
    }

    /// Convert a `u64` into a field element, reducing it modulo `p`.
    #[inline]
    pub const fn from_u64(w: u64) -> Self {
        Self::from_uint_reduced(&Uint::from_u64(w))
    }

    /// Decode a field element from a big endian hex string.
    ///
    /// This is primarily intended for defining constants.
    ///
    /// # Panics
    ///
    /// - When hex is malformed
    /// - When input is the wrong length
    /// - If input overflows the modulus
    pub const fn from_be_hex(hex: &str) -> Self {
        let uint = Uint::from_be_hex(hex);
        assert!(
            reduce::is_less(uint.as_words(), P::DESCRIPTOR.modulus.as_words()) == 1,
            "hex encoded field element overflows modulus"
        );
        Self::from_uint_reduced(&uint)
    }

    /// Create a field element from a [`Uint`] which is already in Montgomery form.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is expected to be in Montgomery form and reduced. Failure to maintain these
    /// invariants will lead to miscomputation and potential security issues!
    ///
    /// No conversion takes place. Use [`Self::to_montgomery`] to convert into Montgomery form
    /// and [`Self::to_canonical`] to convert out of it.
    #[inline]
    pub const fn from_montgomery(uint: Uint<LIMBS>) -> Self {
        Self {
            montgomery: uint,
            params: PhantomData,
        }
    }

    /// Convert a canonical value `x < p` into its Montgomery representation `xR mod p`.
    ///
    /// Inverse of [`Self::to_canonical`].
    #[inline]
    pub const fn to_montgomery(uint: &Uint<LIMBS>) -> Uint<LIMBS> {
        Uint::from_words(monty::to_montgomery(uint.as_words(), &P::DESCRIPTOR))
    }

    /// Borrow the inner [`Uint`] in Montgomery form.
    pub const fn as_montgomery(&self) -> &Uint<LIMBS> {
        &self.montgomery
    }

    /// Translate the element out of the Montgomery domain, returning its canonical residue.
    #[doc(alias = "from_montgomery")]
    #[inline]
    pub const fn to_canonical(self) -> Uint<LIMBS> {
        Uint::from_words(monty::from_montgomery(
            self.montgomery.as_words(),
            &P::DESCRIPTOR,
        ))
    }

    /// Determine if this field element is zero.
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.equals(&Self::ZERO)
    }

    /// Constant-time equality.
    #[inline]
    pub fn equals(&self, rhs: &Self) -> Choice {
        let eq = ct::equals(self.montgomery.as_words(), rhs.montgomery.as_words());
        Choice::from(eq as u8)
    }

    /// Constant-time inequality.
    #[inline]
    pub fn not_equals(&self, rhs: &Self) -> Choice {
        let ne = ct::not_equals(self.montgomery.as_words(), rhs.montgomery.as_words());
        Choice::from(ne as u8)
    }

    /// Returns `a` if `condition` is unset and `b` if it is set, without branching.
    #[inline]
    pub fn select(a: &Self, b: &Self, condition: Choice) -> Self {
        let selected = ct::select(
            a.montgomery.as_words(),
            b.montgomery.as_words(),
            Word::from(condition.unwrap_u8()),
        );
        Self::from_montgomery(Uint::from_words(selected))
    }

    /// Add elements.
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        Self::from_montgomery(P::Backend::add(
            &self.montgomery,
            &rhs.montgomery,
            &P::DESCRIPTOR,
        ))
    }

    /// Double element (add it to itself).
    #[inline]
    #[must_use]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Subtract elements.
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::from_montgomery(P::Backend::sub(
            &self.montgomery,
            &rhs.montgomery,
            &P::DESCRIPTOR,
        ))
    }

    /// Negate element. Zero is its own negation.
    #[inline]
    pub fn neg(&self) -> Self {
        Self::from_montgomery(P::Backend::neg(&self.montgomery, &P::DESCRIPTOR))
    }

    /// Multiply elements.
    #[inline]
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_montgomery(P::Backend::mul(
            &self.montgomery,
            &rhs.montgomery,
            &P::DESCRIPTOR,
        ))
    }

    /// Compute modular square.
    #[inline]
    #[must_use]
    pub fn square(&self) -> Self {
        Self::from_montgomery(P::Backend::square(&self.montgomery, &P::DESCRIPTOR))
    }

    /// Returns `self^(2^n) mod p`.
    ///
    /// **This operation is variable time with respect to the exponent `n`.**
    pub fn sqn(&self, n: usize) -> Self {
        let mut x = *self;
        for _ in 0..n {
            x = x.square();
        }
        x
    }

    /// Raise `self` to the exponent encoded by a fixed chain.
    pub fn pow_chain(&self, chain: Chain) -> Self {
        chain::exec(self, chain)
    }

    /// Compute `self^(p - 2)`, which is the inverse of any nonzero element.
    ///
    /// Zero maps to zero. The running time does not depend on `self`.
    pub fn invert_unchecked(&self) -> Self {
        self.pow_chain(P::INVERT)
    }

    /// Compute field inversion: `1 / self`.
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if `self` is zero.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert_unchecked(), !self.is_zero())
    }

    /// Legendre symbol as a single bit: `1` for a quadratic non-residue, `0` for a residue or
    /// zero.
    ///
    /// Computes `self^((p - 1) / 2)` and reads the bit which separates `-1` from `1` in
    /// Montgomery form.
    pub fn legendre(&self) -> Choice {
        let symbol = self.pow_chain(P::LEGENDRE);
        let bit = P::DESCRIPTOR.legendre_bit;
        let words = symbol.montgomery.as_words();
        let word = words[(bit / Word::BITS) as usize];
        Choice::from(((word >> (bit % Word::BITS)) & 1) as u8)
    }
}

impl<P, const LIMBS: usize> ChainElement for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    #[inline]
    fn mul(&self, rhs: &Self) -> Self {
        self.multiply(rhs)
    }

    #[inline]
    fn square(&self) -> Self {
        Self::square(self)
    }
}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait wrapper for an inherent method.
macro_rules! field_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<P, const LIMBS: usize> $op for FieldElement<P, LIMBS>
        where
            P: FieldParams<LIMBS>,
        {
            type Output = FieldElement<P, LIMBS>;

            #[inline]
            fn $func(self, rhs: FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
                <FieldElement<P, LIMBS>>::$inner_func(&self, &rhs)
            }
        }

        impl<P, const LIMBS: usize> $op<&Self> for FieldElement<P, LIMBS>
        where
            P: FieldParams<LIMBS>,
        {
            type Output = FieldElement<P, LIMBS>;

            #[inline]
            fn $func(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
                <FieldElement<P, LIMBS>>::$inner_func(&self, rhs)
            }
        }

        impl<P, const LIMBS: usize> $op<Self> for &FieldElement<P, LIMBS>
        where
            P: FieldParams<LIMBS>,
        {
            type Output = FieldElement<P, LIMBS>;

            #[inline]
            fn $func(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
                <FieldElement<P, LIMBS>>::$inner_func(self, rhs)
            }
        }
    };
}

field_op!(Add, add, add);
field_op!(Sub, sub, sub);
field_op!(Mul, mul, multiply);

/// Emit the by-value and by-reference `*Assign` impls for an operator.
macro_rules! field_op_assign {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<P, const LIMBS: usize> $op for FieldElement<P, LIMBS>
        where
            P: FieldParams<LIMBS>,
        {
            #[inline]
            fn $func(&mut self, other: FieldElement<P, LIMBS>) {
                *self = self.$inner_func(&other);
            }
        }

        impl<P, const LIMBS: usize> $op<&Self> for FieldElement<P, LIMBS>
        where
            P: FieldParams<LIMBS>,
        {
            #[inline]
            fn $func(&mut self, other: &FieldElement<P, LIMBS>) {
                *self = self.$inner_func(other);
            }
        }
    };
}

field_op_assign!(AddAssign, add_assign, add);
field_op_assign!(SubAssign, sub_assign, sub);
field_op_assign!(MulAssign, mul_assign, multiply);

impl<P, const LIMBS: usize> Neg for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    type Output = FieldElement<P, LIMBS>;

    #[inline]
    fn neg(self) -> FieldElement<P, LIMBS> {
        <FieldElement<P, LIMBS>>::neg(&self)
    }
}

impl<P, const LIMBS: usize> Neg for &FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    type Output = FieldElement<P, LIMBS>;

    #[inline]
    fn neg(self) -> FieldElement<P, LIMBS> {
        <FieldElement<P, LIMBS>>::neg(self)
    }
}

impl<P, const LIMBS: usize> Sum for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Add::add).unwrap_or(Self::ZERO)
    }
}

impl<'a, P, const LIMBS: usize> Sum<&'a Self> for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn sum<I: Iterator<Item = &'a FieldElement<P, LIMBS>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<P, const LIMBS: usize> Product for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Mul::mul).unwrap_or(Self::ONE)
    }
}

impl<'a, P, const LIMBS: usize> Product<&'a Self> for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

//
// `subtle` trait impls
//

impl<P, const LIMBS: usize> ConditionallySelectable for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::select(a, b, choice)
    }
}

impl<P, const LIMBS: usize> ConstantTimeEq for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.equals(other)
    }
}

//
// `core::fmt` trait impls
//

impl<P, const LIMBS: usize> fmt::Debug for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FieldElement<p={}>(0x{:X})",
            P::MODULUS_HEX,
            self.to_canonical()
        )
    }
}

impl<P, const LIMBS: usize> fmt::Display for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<P, const LIMBS: usize> fmt::LowerHex for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_canonical(), f)
    }
}

impl<P, const LIMBS: usize> fmt::UpperHex for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_canonical(), f)
    }
}

//
// Miscellaneous trait impls
//

impl<P, const LIMBS: usize> Default for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Eq for FieldElement<P, LIMBS> {}
impl<P: FieldParams<LIMBS>, const LIMBS: usize> PartialEq for FieldElement<P, LIMBS> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl<P, const LIMBS: usize> From<u32> for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    #[inline]
    fn from(n: u32) -> FieldElement<P, LIMBS> {
        Self::from_u64(n.into())
    }
}

impl<P, const LIMBS: usize> From<u64> for FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    #[inline]
    fn from(n: u64) -> FieldElement<P, LIMBS> {
        Self::from_u64(n)
    }
}

impl<P, const LIMBS: usize> From<FieldElement<P, LIMBS>> for Uint<LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn from(fe: FieldElement<P, LIMBS>) -> Uint<LIMBS> {
        fe.to_canonical()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> zeroize::DefaultIsZeroes
    for FieldElement<P, LIMBS>
{
}

#[cfg(test)]
mod tests {
    use crate::{
        Chain, FieldElement,
        Step::*,
        backend::{Bigint, Portable},
        field_params, test_field,
    };
    use bigint::{U64, U256};
    use subtle::Choice;

    mod mersenne61 {
        use super::*;

        field_params!(
            name: Params,
            modulus: "1fffffffffffffff",
            uint: U64,
            backend: Portable,
            invert: INVERT,
            legendre: LEGENDRE,
            sqrt: three_mod_four(SQRT),
            doc: "2^61 - 1"
        );

        #[rustfmt::skip]
        const INVERT: Chain = &[
            Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8),
            Mul(3), Store(4), Sqn(16), Mul(4), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1),
            Sqn(1), Mul(0), Sqn(2), Mul(0),
        ];

        #[rustfmt::skip]
        const LEGENDRE: Chain = &[
            Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8),
            Mul(3), Store(4), Sqn(16), Mul(4), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4), Mul(2),
        ];

        #[rustfmt::skip]
        const SQRT: Chain = &[
            Sqn(59),
        ];

        type Fe = FieldElement<Params, { U64::LIMBS }>;

        test_field!(Fe, Params);

        #[test]
        fn reduce_vectors() {
            assert_eq!(Fe::reduce(&U64::from_u64(0x1fff_ffff_ffff_ffff)), U64::ZERO);
            assert_eq!(Fe::reduce(&U64::MAX), U64::from_u64(7));
        }

        #[test]
        fn from_uint_rejects_modulus() {
            let p = U64::from_u64(0x1fff_ffff_ffff_ffff);
            assert!(bool::from(Fe::from_uint(&p).is_none()));
            let below = p.wrapping_sub(&U64::ONE);
            assert!(bool::from(Fe::from_uint(&below).is_some()));
        }

        #[test]
        fn display_is_canonical_upper_hex() {
            let fe = Fe::from_u64(0xabc);
            assert_eq!(std::format!("{fe}"), "0000000000000ABC");
            assert_eq!(std::format!("{fe:x}"), "0000000000000abc");
        }
    }

    mod nist_p256 {
        use super::*;

        field_params!(
            name: Params,
            modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
            uint: U256,
            backend: Bigint,
            invert: INVERT,
            legendre: LEGENDRE,
            sqrt: three_mod_four(SQRT),
            doc: "NIST P-256 base field"
        );

        #[rustfmt::skip]
        const INVERT: Chain = &[
            Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8),
            Mul(3), Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8),
            Mul(3), Sqn(4), Mul(2), Sqn(2), Mul(1), Store(7), Load(5), Sqn(32), Mul(0), Sqn(190),
            Mul(7), Sqn(2), Mul(0),
        ];

        #[rustfmt::skip]
        const LEGENDRE: Chain = &[
            Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8),
            Mul(3), Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8),
            Mul(3), Sqn(4), Mul(2), Sqn(2), Mul(1), Sqn(1), Mul(0), Store(7), Load(5), Sqn(32),
            Mul(0), Sqn(191), Mul(7),
        ];

        #[rustfmt::skip]
        const SQRT: Chain = &[
            Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8),
            Mul(3), Store(4), Sqn(16), Mul(4), Sqn(32), Mul(0), Sqn(96), Mul(0), Sqn(94),
        ];

        type Fe = FieldElement<Params, { U256::LIMBS }>;

        test_field!(Fe, Params);

        #[test]
        fn select_and_equality() {
            let a = Fe::from_u64(3);
            let b = Fe::from_u64(5);
            assert_eq!(Fe::select(&a, &b, Choice::from(0)), a);
            assert_eq!(Fe::select(&a, &b, Choice::from(1)), b);
            assert!(bool::from(a.not_equals(&b)));
            assert!(bool::from(a.equals(&a)));
        }

        #[test]
        fn sum_and_product() {
            let xs = [Fe::from_u64(2), Fe::from_u64(3), Fe::from_u64(7)];
            assert_eq!(xs.iter().sum::<Fe>(), Fe::from_u64(12));
            assert_eq!(xs.iter().product::<Fe>(), Fe::from_u64(42));
        }
    }
}
