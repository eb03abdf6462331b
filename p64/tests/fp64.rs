//! Fp64 scenarios: the 5 mod 8 square root and an integer oracle.

use ctfield::{bigint::U64, rand_core::OsRng};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use p64::Fp64;

const PSI: Fp64 = Fp64::from_be_hex("1fdd1bb873dc8195");

fn modulus() -> BigUint {
    BigUint::from(0xffff_ffff_ffff_ffc5u64)
}

#[test]
fn psi_squares_to_minus_one() {
    assert_eq!(PSI.square(), Fp64::MINUS_ONE);
}

#[test]
fn sqrt_of_minus_one() {
    let root = Fp64::MINUS_ONE.sqrt_with_rng(&mut OsRng).unwrap().unwrap();
    assert!(root == PSI || root == -PSI);
}

#[test]
fn two_is_not_a_square() {
    // p = 5 (mod 8)
    let two = Fp64::from_u64(2);
    assert!(bool::from(two.legendre()));
    assert!(bool::from(two.sqrt_with_rng(&mut OsRng).unwrap().is_none()));
}

#[test]
fn reduce_all_ones() {
    // 2^64 - 1 - p
    assert_eq!(Fp64::reduce(&U64::MAX), U64::from_u64(58));
}

#[test]
fn invert_matches_modpow() {
    let p = modulus();
    for n in [2u64, 59, 0xdead_beef, 0xffff_ffff_ffff_ffc4] {
        let expected = BigUint::from(n).modpow(&(&p - 2u8), &p);
        let inverse = Fp64::from_u64(n).invert().unwrap();
        assert_eq!(to_big(inverse), expected);
        assert!((to_big(inverse) * n % &p).is_one());
    }
}

#[test]
fn multiply_matches_integers() {
    let p = modulus();
    let (a, b) = (0xfeed_face_cafe_beefu64, 0x0123_4567_89ab_cdefu64);
    let product = Fp64::from_u64(a) * Fp64::from_u64(b);
    assert_eq!(to_big(product), BigUint::from(a) * b % &p);
    assert!(to_big(Fp64::from_u64(a) * Fp64::ZERO).is_zero());
}

fn to_big(x: Fp64) -> BigUint {
    BigUint::parse_bytes(format!("{x:x}").as_bytes(), 16).unwrap()
}
