//! Macros for declaring fields.

/// Creates a ZST describing a prime field and implements [`FieldParams`] for it.
///
/// Accepts the following parameters:
///
/// - name of the ZST representing the field
/// - big endian hex serialization of the modulus, padded to the width of `uint`
/// - `crypto-bigint` unsigned integer type (e.g. U256)
/// - backend type implementing [`Backend`]
/// - the inversion chain (`a^(p-2)`)
/// - the Legendre chain (`a^((p-1)/2)`)
/// - the square root strategy: `three_mod_four(chain)`, `five_mod_eight(chain, "psi hex")` or
///   `general(chain)`
/// - documentation string for the field type
///
/// The descriptor and the chains are checked when the constants are first used, so a bad modulus
/// or chain is a compile-time error.
///
/// ```
/// use ctfield::{Chain, Step::*, backend::Portable, bigint::U64};
///
/// const INVERT: Chain = &[
///     Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8),
///     Mul(3), Store(4), Sqn(16), Mul(4), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1),
///     Sqn(1), Mul(0), Sqn(2), Mul(0),
/// ];
/// const LEGENDRE: Chain = &[
///     Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8),
///     Mul(3), Store(4), Sqn(16), Mul(4), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4), Mul(2),
/// ];
/// const SQRT: Chain = &[Sqn(59)];
///
/// ctfield::field_params!(
///     name: Mersenne61,
///     modulus: "1fffffffffffffff",
///     uint: U64,
///     backend: Portable,
///     invert: INVERT,
///     legendre: LEGENDRE,
///     sqrt: three_mod_four(SQRT),
///     doc: "Field modulo 2^61 - 1"
/// );
///
/// type Fe = ctfield::FieldElement<Mersenne61, { U64::LIMBS }>;
/// assert_eq!(Fe::from_u64(3).invert().unwrap() * Fe::from_u64(3), Fe::ONE);
/// ```
///
/// [`FieldParams`]: crate::FieldParams
/// [`Backend`]: crate::Backend
#[macro_export]
macro_rules! field_params {
    (
        name: $name:ident,
        modulus: $modulus_hex:expr,
        uint: $uint:ty,
        backend: $backend:ty,
        invert: $invert:expr,
        legendre: $legendre:expr,
        sqrt: $strategy:ident($($sqrt_args:tt)*),
        doc: $doc:expr
    ) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        impl $crate::FieldParams<{ <$uint>::LIMBS }> for $name {
            type Backend = $backend;

            const MODULUS_HEX: &'static str = $modulus_hex;

            const DESCRIPTOR: $crate::FieldDescriptor<{ <$uint>::LIMBS }> =
                $crate::FieldDescriptor::new(&<$uint>::from_be_hex($modulus_hex));

            const INVERT: $crate::Chain = {
                assert!($crate::chain::validate($invert), "invalid inversion chain");
                $invert
            };

            const LEGENDRE: $crate::Chain = {
                assert!($crate::chain::validate($legendre), "invalid Legendre chain");
                $legendre
            };

            const SQRT: $crate::SqrtStrategy<{ <$uint>::LIMBS }> =
                $crate::SqrtStrategy::$strategy(&Self::DESCRIPTOR, $($sqrt_args)*);
        }
    };
}
