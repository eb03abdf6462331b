//! Field modulo p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1, the NIST P-256 base field

use crate::backend::FieldBackend;
use ctfield::{Chain, FieldElement, Step::*, bigint::U256};

ctfield::field_params!(
    name: Fp256Params,
    modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    uint: U256,
    backend: FieldBackend,
    invert: INVERT,
    legendre: LEGENDRE,
    sqrt: three_mod_four(SQRT),
    doc: "NIST P-256 base field: p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1"
);

/// Element of the NIST P-256 base field.
pub type Fp256 = FieldElement<Fp256Params, { U256::LIMBS }>;

/// `a^(p - 2)`
#[rustfmt::skip]
const INVERT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4),
    Mul(2), Sqn(2), Mul(1), Store(7), Load(5), Sqn(32), Mul(0), Sqn(190), Mul(7), Sqn(2), Mul(0),
];

#[rustfmt::skip]
const LEGENDRE: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4),
    Mul(2), Sqn(2), Mul(1), Sqn(1), Mul(0), Store(7), Load(5), Sqn(32), Mul(0), Sqn(191), Mul(7),
];

#[rustfmt::skip]
const SQRT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Sqn(32), Mul(0), Sqn(96), Mul(0), Sqn(94),
];

#[cfg(test)]
mod tests {
    use super::{Fp256, Fp256Params};
    use ctfield::{
        backend::{Bigint, Portable},
        bigint::U256,
    };

    ctfield::test_field!(Fp256, Fp256Params);

    #[cfg(target_pointer_width = "64")]
    ctfield::test_backend_conformance!(
        Fp256Params,
        U256,
        [Portable, Bigint, crate::backend::Nist64]
    );

    #[cfg(not(target_pointer_width = "64"))]
    ctfield::test_backend_conformance!(Fp256Params, U256, [Portable, Bigint]);
}
