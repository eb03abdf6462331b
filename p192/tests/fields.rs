//! Square root constants and reduction vectors for the 192-bit fields.

use ctfield::{bigint::U192, rand_core::OsRng};
use hex_literal::hex;
use p192::{Fp191, Fp192};

const PSI: Fp191 = Fp191::from_be_hex("67097b812847d61cea189a3a6cf80b5cbd7e9efa2231b635");

#[test]
fn fp191_sqrt_of_minus_one() {
    assert_eq!(PSI.square(), Fp191::MINUS_ONE);
    let root = Fp191::MINUS_ONE.sqrt_with_rng(&mut OsRng).unwrap().unwrap();
    assert!(root == PSI || root == -PSI);
}

#[test]
fn fp191_sqrt_needs_psi_correction() {
    // a^((p+3)/8) alone only works for half of the squares; run enough to hit both branches
    for n in 1u64..64 {
        let x = Fp191::from_u64(n);
        let root = x.square().sqrt_with_rng(&mut OsRng).unwrap().unwrap();
        assert_eq!(root.square(), x.square());
    }
}

#[test]
fn fp191_reduce_vectors() {
    let p = U192::from_be_slice(&hex!("7fffffffffffffffffffffffffffffffffffffffffffffed"));
    assert_eq!(Fp191::reduce(&p), U192::ZERO);

    // 2^192 - 1 = 2p + 37
    assert_eq!(Fp191::reduce(&U192::MAX), U192::from_u64(37));
}

#[test]
fn fp192_reduce_vectors() {
    let p = U192::from_be_slice(&hex!("ffffffffffffffffffffffffffffffffffffffffffffff13"));
    assert_eq!(Fp192::reduce(&p), U192::ZERO);
    assert_eq!(Fp192::reduce(&U192::MAX), U192::from_u64(236));
}

#[test]
fn fp192_inverse_product_is_bit_identical_to_one() {
    let x = Fp192::from_be_hex("0000000000000000deadbeefdeadbeefdeadbeefdeadbeef");
    let product = x * x.invert().unwrap();
    assert_eq!(product.as_montgomery(), Fp192::ONE.as_montgomery());
    assert_eq!(product.to_canonical(), U192::ONE);
}

#[test]
fn fp192_minus_one_is_not_a_square() {
    assert!(bool::from(Fp192::MINUS_ONE.legendre()));
}
