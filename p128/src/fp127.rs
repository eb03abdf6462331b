//! Field modulo the Mersenne prime p = 2^127 - 1

use ctfield::{Chain, FieldElement, Step::*, backend::DefaultBackend, bigint::U128};

ctfield::field_params!(
    name: Fp127Params,
    modulus: "7fffffffffffffffffffffffffffffff",
    uint: U128,
    backend: DefaultBackend,
    invert: INVERT,
    legendre: LEGENDRE,
    sqrt: three_mod_four(SQRT),
    doc: "Field modulo p = 2^127 - 1"
);

/// Element of the field modulo `2^127 - 1`.
pub type Fp127 = FieldElement<Fp127Params, { U128::LIMBS }>;

/// `a^(p - 2)`
#[rustfmt::skip]
const INVERT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8),
    Mul(3), Sqn(4), Mul(2), Sqn(1), Mul(0), Sqn(2), Mul(0),
];

#[rustfmt::skip]
const LEGENDRE: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8),
    Mul(3), Sqn(4), Mul(2), Sqn(2), Mul(1),
];

#[rustfmt::skip]
const SQRT: Chain = &[
    Sqn(125),
];

#[cfg(test)]
mod tests {
    use super::{Fp127, Fp127Params};
    use ctfield::{
        backend::{Bigint, Portable},
        bigint::U128,
    };

    ctfield::test_field!(Fp127, Fp127Params);
    ctfield::test_backend_conformance!(Fp127Params, U128, [Portable, Bigint]);
}
