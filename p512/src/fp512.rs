//! Field modulo p = 2^512 - 569

use ctfield::{Chain, FieldElement, Step::*, backend::DefaultBackend, bigint::U512};

ctfield::field_params!(
    name: Fp512Params,
    modulus: concat!(
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffdc7"
    ),
    uint: U512,
    backend: DefaultBackend,
    invert: INVERT,
    legendre: LEGENDRE,
    sqrt: three_mod_four(SQRT),
    doc: "Field modulo p = 2^512 - 569"
);

/// Element of the field modulo `2^512 - 569`.
pub type Fp512 = FieldElement<Fp512Params, { U512::LIMBS }>;

/// `a^(p - 2)`
#[rustfmt::skip]
const INVERT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Store(7),
    Sqn(128), Mul(7), Store(8), Load(1), Sqn(1), Mul(0), Store(9), Load(8), Sqn(128), Mul(7),
    Sqn(64), Mul(6), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(4), Mul(2), Sqn(2), Mul(1), Sqn(4),
    Mul(9), Sqn(4), Mul(0), Sqn(2), Mul(0),
];

#[rustfmt::skip]
const LEGENDRE: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Store(7),
    Sqn(128), Mul(7), Store(8), Load(1), Sqn(1), Mul(0), Store(9), Load(8), Sqn(128), Mul(7),
    Sqn(64), Mul(6), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(4), Mul(2), Sqn(2), Mul(1), Sqn(4),
    Mul(9), Sqn(5), Mul(1),
];

#[rustfmt::skip]
const SQRT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Store(7),
    Sqn(128), Mul(7), Store(8), Load(1), Sqn(1), Mul(0), Store(9), Load(8), Sqn(128), Mul(7),
    Sqn(64), Mul(6), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(4), Mul(2), Sqn(2), Mul(1), Sqn(4),
    Mul(9), Sqn(3), Mul(0), Sqn(1),
];
