//! Fp61 scenarios: reduction vectors and Montgomery constants.

use ctfield::{bigint::U64, rand_core::OsRng};
use hex_literal::hex;
use p64::Fp61;

#[test]
fn reduce_modulus_is_zero() {
    let p = U64::from_be_slice(&hex!("1fffffffffffffff"));
    assert_eq!(Fp61::reduce(&p), U64::ZERO);
}

#[test]
fn reduce_all_ones() {
    // 2^64 - 1 = 8·(2^61 - 1) + 7
    assert_eq!(Fp61::reduce(&U64::MAX), U64::from_u64(7));
}

#[test]
fn reduce_just_below_modulus() {
    let x = U64::from_be_slice(&hex!("1ffffffffffffffe"));
    assert_eq!(Fp61::reduce(&x), x);
}

#[test]
fn montgomery_one_is_eight() {
    assert_eq!(Fp61::ONE.as_montgomery(), &U64::from_u64(8));
    assert_eq!(Fp61::to_montgomery(&U64::ONE), U64::from_u64(8));
    assert_eq!(Fp61::ONE.to_canonical(), U64::ONE);
}

#[test]
fn decode_minus_one() {
    let x = Fp61::from_uint(&U64::from_be_slice(&hex!("1ffffffffffffffe"))).unwrap();
    assert_eq!(x, Fp61::MINUS_ONE);
    assert!(bool::from(
        Fp61::from_uint(&U64::from_be_slice(&hex!("2000000000000000"))).is_none()
    ));
}

#[test]
fn inverse_product_is_bit_identical_to_one() {
    for n in [2u64, 3, 0x1234_5678_9abc, 0x1fff_ffff_ffff_fffe] {
        let x = Fp61::from_u64(n);
        let product = x * x.invert().unwrap();
        assert_eq!(product.as_montgomery(), Fp61::ONE.as_montgomery());
    }
}

#[test]
fn minus_one_is_not_a_square() {
    // p = 3 (mod 4)
    assert!(bool::from(Fp61::MINUS_ONE.legendre()));
    let root = Fp61::MINUS_ONE.sqrt_with_rng(&mut OsRng).unwrap();
    assert!(bool::from(root.is_none()));
}
