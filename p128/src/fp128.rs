//! Field modulo p = 2^128 - 173
//!
//! The modulus fills the whole of `R = 2^128`, so reduction is a single masked subtraction.

use ctfield::{Chain, FieldElement, Step::*, backend::DefaultBackend, bigint::U128};

ctfield::field_params!(
    name: Fp128Params,
    modulus: "ffffffffffffffffffffffffffffff53",
    uint: U128,
    backend: DefaultBackend,
    invert: INVERT,
    legendre: LEGENDRE,
    sqrt: three_mod_four(SQRT),
    doc: "Field modulo p = 2^128 - 173"
);

/// Element of the field modulo `2^128 - 173`.
pub type Fp128 = FieldElement<Fp128Params, { U128::LIMBS }>;

/// `a^(p - 2)`
#[rustfmt::skip]
const INVERT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8),
    Mul(3), Sqn(2), Mul(0), Sqn(2), Mul(0), Sqn(4), Mul(0),
];

#[rustfmt::skip]
const LEGENDRE: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8),
    Mul(3), Sqn(2), Mul(0), Sqn(2), Mul(0), Sqn(3), Mul(0),
];

#[rustfmt::skip]
const SQRT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Sqn(32), Mul(5), Sqn(16), Mul(4), Sqn(8),
    Mul(3), Sqn(2), Mul(0), Sqn(2), Mul(0), Sqn(2), Mul(0),
];
