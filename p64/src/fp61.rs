//! Field modulo the Mersenne prime p = 2^61 - 1
//!
//! `R = 2^64` is eight times larger than `p`, so raw values are brought into range with a
//! pseudo-Mersenne fold rather than a trial subtraction.

use ctfield::{Chain, FieldElement, Step::*, backend::DefaultBackend, bigint::U64};

ctfield::field_params!(
    name: Fp61Params,
    modulus: "1fffffffffffffff",
    uint: U64,
    backend: DefaultBackend,
    invert: INVERT,
    legendre: LEGENDRE,
    sqrt: three_mod_four(SQRT),
    doc: "Field modulo p = 2^61 - 1"
);

/// Element of the field modulo `2^61 - 1`.
pub type Fp61 = FieldElement<Fp61Params, { U64::LIMBS }>;

/// `a^(p - 2)`
#[rustfmt::skip]
const INVERT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1), Sqn(1), Mul(0),
    Sqn(2), Mul(0),
];

#[rustfmt::skip]
const LEGENDRE: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4), Mul(2),
];

#[rustfmt::skip]
const SQRT: Chain = &[
    Sqn(59),
];
