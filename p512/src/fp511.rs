//! Field modulo p = 2^511 - 2^320 + 1
//!
//! `p ≡ 1 (mod 8)`, so square roots fall back to Cipolla's method, which draws random elements
//! and is not constant time.

use ctfield::{Chain, FieldElement, Step::*, backend::DefaultBackend, bigint::U512};

ctfield::field_params!(
    name: Fp511Params,
    modulus: concat!(
        "7fffffffffffffffffffffffffffffffffffffffffffffff0000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000001"
    ),
    uint: U512,
    backend: DefaultBackend,
    invert: INVERT,
    legendre: LEGENDRE,
    sqrt: general(SQRT),
    doc: "Field modulo p = 2^511 - 2^320 + 1"
);

/// Element of the field modulo `2^511 - 2^320 + 1`.
pub type Fp511 = FieldElement<Fp511Params, { U512::LIMBS }>;

/// `a^(p - 2)`
#[rustfmt::skip]
const INVERT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Store(7),
    Sqn(128), Mul(7), Store(8), Load(7), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4),
    Mul(2), Sqn(2), Mul(1), Store(9), Load(8), Sqn(64), Mul(6), Store(10), Load(9), Sqn(321),
    Mul(10),
];

#[rustfmt::skip]
const LEGENDRE: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(32),
    Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4), Mul(2), Sqn(2), Mul(1), Sqn(1), Mul(0),
    Sqn(319),
];

#[rustfmt::skip]
const SQRT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(32),
    Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4), Mul(2), Sqn(2), Mul(1), Sqn(1), Mul(0),
    Sqn(319), Mul(0),
];

#[cfg(test)]
mod tests {
    use super::{Fp511, Fp511Params};
    use ctfield::{
        backend::{Bigint, Portable},
        bigint::U512,
    };

    ctfield::test_field!(Fp511, Fp511Params);
    ctfield::test_backend_conformance!(Fp511Params, U512, [Portable, Bigint]);
}
