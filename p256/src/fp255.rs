//! Field modulo p = 2^255 - 19, the base field of Curve25519

use ctfield::{Chain, FieldElement, Step::*, backend::DefaultBackend, bigint::U256};

ctfield::field_params!(
    name: Fp255Params,
    modulus: "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
    uint: U256,
    backend: DefaultBackend,
    invert: INVERT,
    legendre: LEGENDRE,
    sqrt: five_mod_eight(
        SQRT,
        "2b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b0"
    ),
    doc: "Field modulo p = 2^255 - 19"
);

/// Element of the field modulo `2^255 - 19`.
pub type Fp255 = FieldElement<Fp255Params, { U256::LIMBS }>;

/// `a^(p - 2)`
#[rustfmt::skip]
const INVERT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(64),
    Mul(6), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1), Sqn(2), Mul(0),
    Sqn(3), Mul(1),
];

#[rustfmt::skip]
const LEGENDRE: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(64),
    Mul(6), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1), Sqn(3), Mul(1),
    Sqn(1),
];

#[rustfmt::skip]
const SQRT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(64),
    Mul(6), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1), Sqn(2), Mul(0),
];
