//! Field modulo p = 2^191 - 19
//!
//! `p ≡ 5 (mod 8)`: square roots take one exponentiation plus a multiplication by a fixed
//! square root of `-1`.

use ctfield::{Chain, FieldElement, Step::*, backend::DefaultBackend, bigint::U192};

ctfield::field_params!(
    name: Fp191Params,
    modulus: "7fffffffffffffffffffffffffffffffffffffffffffffed",
    uint: U192,
    backend: DefaultBackend,
    invert: INVERT,
    legendre: LEGENDRE,
    sqrt: five_mod_eight(
        SQRT,
        "67097b812847d61cea189a3a6cf80b5cbd7e9efa2231b635"
    ),
    doc: "Field modulo p = 2^191 - 19"
);

/// Element of the field modulo `2^191 - 19`.
pub type Fp191 = FieldElement<Fp191Params, { U192::LIMBS }>;

/// `a^(p - 2)`
#[rustfmt::skip]
const INVERT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(32),
    Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1), Sqn(2), Mul(0), Sqn(3), Mul(1),
];

#[rustfmt::skip]
const LEGENDRE: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(32),
    Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1), Sqn(3), Mul(1), Sqn(1),
];

#[rustfmt::skip]
const SQRT: Chain = &[
    Sqn(1), Mul(0), Store(1), Sqn(2), Mul(1), Store(2), Sqn(4), Mul(2), Store(3), Sqn(8), Mul(3),
    Store(4), Sqn(16), Mul(4), Store(5), Sqn(32), Mul(5), Store(6), Sqn(64), Mul(6), Sqn(32),
    Mul(5), Sqn(16), Mul(4), Sqn(8), Mul(3), Sqn(2), Mul(1), Sqn(2), Mul(0),
];

#[cfg(test)]
mod tests {
    use super::{Fp191, Fp191Params};
    use ctfield::{
        backend::{Bigint, Portable},
        bigint::U192,
    };

    ctfield::test_field!(Fp191, Fp191Params);
    ctfield::test_backend_conformance!(Fp191Params, U192, [Portable, Bigint]);
}
