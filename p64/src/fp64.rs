//! Field modulo p = 2^64 - 59

use ctfield::{Chain, FieldElement, Step::*, backend::DefaultBackend, bigint::U64};

ctfield::field_params!(
    name: Fp64Params,
    modulus: "ffffffffffffffc5",
    uint: U64,
    backend: DefaultBackend,
    invert: INVERT,
    legendre: LEGENDRE,
    sqrt: five_mod_eight(SQRT, "1fdd1bb873dc8195"),
    doc: "Field modulo p = 2^64 - 59"
);

/// Element of the field modulo `2^64 - 59`.
pub type Fp64 = FieldElement<Fp64Params, { U64::LIMBS }>;

/// `a^(p - 2)`
#[rustfmt::skip]
const INVERT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1), Sqn(6), Mul(1),
];

#[rustfmt::skip]
const LEGENDRE: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1), Sqn(4), Mul(0),
    Sqn(1),
];

#[rustfmt::skip]
const SQRT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1), Sqn(3),
];
