//! Field modulo p = 2^192 - 237

use ctfield::{Chain, FieldElement, Step::*, backend::DefaultBackend, bigint::U192};

ctfield::field_params!(
    name: Fp192Params,
    modulus: "ffffffffffffffffffffffffffffffffffffffffffffff13",
    uint: U192,
    backend: DefaultBackend,
    invert: INVERT,
    legendre: LEGENDRE,
    sqrt: three_mod_four(SQRT),
    doc: "Field modulo p = 2^192 - 237"
);

/// Element of the field modulo `2^192 - 237`.
pub type Fp192 = FieldElement<Fp192Params, { U192::LIMBS }>;

/// `a^(p - 2)`
#[rustfmt::skip]
const INVERT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(32),
    Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4), Mul(0), Sqn(4), Mul(0),
];

#[rustfmt::skip]
const LEGENDRE: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(32),
    Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4), Mul(0), Sqn(3), Mul(0),
];

#[rustfmt::skip]
const SQRT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(32),
    Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(4), Mul(0), Sqn(2), Mul(0),
];

#[cfg(test)]
mod tests {
    use super::{Fp192, Fp192Params};
    use ctfield::{
        backend::{Bigint, Portable},
        bigint::U192,
    };

    ctfield::test_field!(Fp192, Fp192Params);
    ctfield::test_backend_conformance!(Fp192Params, U192, [Portable, Bigint]);
}
