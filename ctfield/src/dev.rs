//! Development-related functionality: test and benchmark macros shared by the field crates.
//!
//! The test macros expect the calling crate to have `proptest`, `num-bigint` and `rand_core`
//! (with the `os_rng` feature) available as dev-dependencies.

/// Write a series of `criterion`-based benchmarks for a field implementation.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| x + y));
        }

        fn bench_sub<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("sub", |b| b.iter(|| x - y));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| x * y));
        }

        fn bench_neg<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("neg", |b| b.iter(|| -x));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("invert", |b| b.iter(|| x.invert()));
        }

        fn bench_square<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("square", |b| b.iter(|| x.square()));
        }

        fn bench_legendre<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("legendre", |b| b.iter(|| x.legendre()));
        }

        fn bench_sqrt<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let mut rng = $crate::rand_core::OsRng;
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt_with_rng(&mut rng)));
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_neg(&mut group);
            bench_invert(&mut group);
            bench_square(&mut group);
            bench_legendre(&mut group);
            bench_sqrt(&mut group);
            group.finish();
        }
    };
}

/// Implement all tests for a field element type and its parameters.
#[macro_export]
macro_rules! test_field {
    ($fe:tt, $params:ty) => {
        $crate::test_field_identity!($fe);
        $crate::test_field_invert!($fe);
        $crate::test_field_legendre!($fe);
        $crate::test_field_sqrt!($fe);
        $crate::test_field_reduce!($fe);
        $crate::test_field_properties!($fe);
        $crate::test_field_chains!($fe, $params);
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($fe:tt) => {
        #[test]
        fn zero_is_additive_identity() {
            let zero = $fe::ZERO;
            let one = $fe::ONE;
            assert_eq!(zero.add(&zero), zero);
            assert_eq!(one.add(&zero), one);
            assert_eq!(-zero, zero);
            assert!(bool::from(zero.is_zero()));
            assert!(!bool::from(one.is_zero()));
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let one = $fe::ONE;
            assert_eq!(one.multiply(&one), one);
            assert_eq!(one.square(), one);
            assert_eq!($fe::from_u64(1), one);
        }

        #[test]
        fn minus_one_is_additive_inverse_of_one() {
            assert_eq!($fe::ONE + $fe::MINUS_ONE, $fe::ZERO);
            assert_eq!(-$fe::ONE, $fe::MINUS_ONE);
            assert_eq!($fe::MINUS_ONE.square(), $fe::ONE);
        }

        #[test]
        fn canonical_round_trip() {
            let x = $fe::from_u64(0x1234_5678);
            assert_eq!($fe::from_uint(&x.to_canonical()).unwrap(), x);
            assert_eq!($fe::ZERO.to_canonical(), $crate::bigint::Uint::ZERO);
            assert_eq!($fe::ONE.to_canonical(), $crate::bigint::Uint::ONE);
        }

        #[test]
        fn montgomery_round_trip() {
            let x = $fe::from_u64(0x1234_5678);
            let montgomery = $fe::to_montgomery(&x.to_canonical());
            assert_eq!(&montgomery, x.as_montgomery());
            assert_eq!($fe::from_montgomery(montgomery), x);
            assert_eq!($fe::from_montgomery(montgomery).to_canonical(), x.to_canonical());
        }

        #[test]
        fn double_and_sqn() {
            let x = $fe::from_u64(7);
            assert_eq!(x.double(), $fe::from_u64(14));
            assert_eq!(x.sqn(3), $fe::from_u64(5_764_801));
            assert_eq!(x.sqn(0), x);
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($fe:tt) => {
        #[test]
        fn invert() {
            let one = $fe::ONE;
            assert_eq!(one.invert().unwrap(), one);

            let three = one + &one + &one;
            let inv_three = three.invert().unwrap();
            assert_eq!(three * &inv_three, one);

            let minus_three = -three;
            let inv_minus_three = minus_three.invert().unwrap();
            assert_eq!(inv_minus_three, -inv_three);
            assert_eq!(three * &inv_minus_three, -one);
        }

        #[test]
        fn invert_one_is_bit_identical() {
            let inv = $fe::ONE.invert_unchecked();
            assert_eq!(inv.as_montgomery(), $fe::ONE.as_montgomery());
        }

        #[test]
        fn invert_zero() {
            assert!(bool::from($fe::ZERO.invert().is_none()));
            assert_eq!($fe::ZERO.invert_unchecked(), $fe::ZERO);
        }
    };
}

/// Implement Legendre symbol tests.
#[macro_export]
macro_rules! test_field_legendre {
    ($fe:tt) => {
        #[test]
        fn legendre_of_squares() {
            assert!(!bool::from($fe::ZERO.legendre()));
            for n in 1u64..32 {
                assert!(!bool::from($fe::from_u64(n).square().legendre()));
            }
        }

        #[test]
        fn legendre_of_minus_one() {
            // -1 is a square exactly when p = 1 (mod 4)
            let p_mod_4 = $fe::MODULUS.as_words()[0] & 3;
            assert_eq!(bool::from($fe::MINUS_ONE.legendre()), p_mod_4 == 3);
        }

        #[test]
        fn legendre_finds_small_non_residue() {
            let non_residue = (2u64..1000)
                .map($fe::from_u64)
                .find(|x| bool::from(x.legendre()))
                .unwrap();

            // a non-residue times a square stays a non-residue
            assert!(bool::from((non_residue * $fe::from_u64(9)).legendre()));
            assert!(!bool::from(non_residue.square().legendre()));
        }
    };
}

/// Implement field element square root tests.
#[macro_export]
macro_rules! test_field_sqrt {
    ($fe:tt) => {
        #[test]
        fn sqrt() {
            let mut rng = $crate::rand_core::OsRng;
            for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
                let fe = $fe::from(n);
                let sqrt = fe.sqrt_with_rng(&mut rng).unwrap().unwrap();
                assert_eq!(sqrt.square(), fe);
            }
        }

        #[test]
        fn sqrt_of_zero() {
            let root = $fe::ZERO
                .sqrt_with_rng(&mut $crate::rand_core::OsRng)
                .unwrap();
            assert_eq!(root.unwrap(), $fe::ZERO);
        }

        #[test]
        fn sqrt_of_non_residue() {
            let mut rng = $crate::rand_core::OsRng;
            let non_residue = (2u64..1000)
                .map($fe::from_u64)
                .find(|x| bool::from(x.legendre()))
                .unwrap();
            let root = non_residue.sqrt_with_rng(&mut rng).unwrap();
            assert!(bool::from(root.is_none()));
        }
    };
}

/// Implement tests for the raw modular reduction.
#[macro_export]
macro_rules! test_field_reduce {
    ($fe:tt) => {
        mod reduction {
            use super::*;
            use $crate::bigint::{Limb, Uint};

            use ::num_bigint::BigUint;
            use ::proptest::{collection::vec, prelude::*};

            const BYTES: usize = $fe::LIMBS * Limb::BYTES;

            fn to_big(x: impl ::core::fmt::LowerHex) -> BigUint {
                BigUint::parse_bytes(::std::format!("{x:x}").as_bytes(), 16).unwrap()
            }

            #[test]
            fn reduce_boundaries() {
                let p = $fe::MODULUS;
                let p_minus_one = p.wrapping_sub(&Uint::ONE);
                assert_eq!($fe::reduce(&Uint::ZERO), Uint::ZERO);
                assert_eq!($fe::reduce(&p), Uint::ZERO);
                assert_eq!($fe::reduce(&p_minus_one), p_minus_one);
                assert_eq!(
                    to_big($fe::reduce(&Uint::MAX)),
                    to_big(Uint::<{ $fe::LIMBS }>::MAX) % to_big(p)
                );
            }

            proptest! {
                #[test]
                fn reduce_is_canonical(bytes in vec(any::<u8>(), BYTES)) {
                    let x = Uint::from_le_slice(&bytes);
                    let r = $fe::reduce(&x);
                    prop_assert!(r < $fe::MODULUS);
                    prop_assert_eq!(to_big(r), to_big(x) % to_big($fe::MODULUS));
                    prop_assert_eq!($fe::reduce(&r), r);
                }
            }
        }
    };
}

/// Implement algebraic property tests over random elements, checked against `num-bigint`.
#[macro_export]
macro_rules! test_field_properties {
    ($fe:tt) => {
        mod properties {
            use super::*;
            use $crate::bigint::{Limb, Uint};

            use ::num_bigint::BigUint;
            use ::proptest::{collection::vec, prelude::*};

            const BYTES: usize = $fe::LIMBS * Limb::BYTES;

            fn to_big(x: impl ::core::fmt::LowerHex) -> BigUint {
                BigUint::parse_bytes(::std::format!("{x:x}").as_bytes(), 16).unwrap()
            }

            fn field_element() -> impl Strategy<Value = $fe> {
                vec(any::<u8>(), BYTES)
                    .prop_map(|bytes| $fe::from_uint_reduced(&Uint::from_le_slice(&bytes)))
            }

            proptest! {
                #[test]
                fn matches_integer_arithmetic(a in field_element(), b in field_element()) {
                    let p = to_big($fe::MODULUS);
                    let (x, y) = (to_big(a), to_big(b));
                    prop_assert_eq!(to_big(a + b), (&x + &y) % &p);
                    prop_assert_eq!(to_big(a - b), (&x + &p - &y) % &p);
                    prop_assert_eq!(to_big(a * b), (&x * &y) % &p);
                    prop_assert_eq!(to_big(-a), (&p - &x) % &p);
                    prop_assert_eq!(to_big(a.square()), (&x * &x) % &p);
                }

                #[test]
                fn ring_laws(a in field_element(), b in field_element(), c in field_element()) {
                    prop_assert_eq!(a + b, b + a);
                    prop_assert_eq!(a * b, b * a);
                    prop_assert_eq!((a + b) + c, a + (b + c));
                    prop_assert_eq!((a * b) * c, a * (b * c));
                    prop_assert_eq!(a * (b + c), a * b + a * c);
                    prop_assert_eq!(a - b, a + (-b));
                    prop_assert_eq!(a + (-a), $fe::ZERO);
                }

                #[test]
                fn invert_round_trip(a in field_element()) {
                    prop_assume!(!bool::from(a.is_zero()));
                    let inverse = a.invert().unwrap();
                    prop_assert_eq!(a * inverse, $fe::ONE);
                    prop_assert_eq!(inverse.invert().unwrap(), a);
                }

                #[test]
                fn legendre_is_multiplicative(a in field_element(), b in field_element()) {
                    prop_assume!(!bool::from(a.is_zero() | b.is_zero()));
                    let product = (a * b).legendre();
                    prop_assert_eq!(bool::from(product), bool::from(a.legendre() ^ b.legendre()));
                    prop_assert_eq!(
                        bool::from((a * b.square()).legendre()),
                        bool::from(a.legendre())
                    );
                }

                #[test]
                fn sqrt_of_square(a in field_element()) {
                    let root = a
                        .square()
                        .sqrt_with_rng(&mut $crate::rand_core::OsRng)
                        .unwrap()
                        .unwrap();
                    prop_assert!(root == a || root == -a);
                }

                #[test]
                fn canonical_round_trip(a in field_element()) {
                    prop_assert_eq!($fe::from_uint(&a.to_canonical()).unwrap(), a);
                }
            }
        }
    };
}

/// Check every exponent chain of a field against the exponent it must compute.
#[macro_export]
macro_rules! test_field_chains {
    ($fe:tt, $params:ty) => {
        mod chains {
            use super::*;
            use $crate::{Chain, ChainElement, FieldParams, SqrtStrategy, chain};

            use ::num_bigint::BigUint;

            const LIMBS: usize = $fe::LIMBS;

            /// Tracks the exponent a chain produces instead of a power.
            #[derive(Clone)]
            struct Exponent(BigUint);

            impl ChainElement for Exponent {
                fn mul(&self, rhs: &Self) -> Self {
                    Exponent(&self.0 + &rhs.0)
                }

                fn square(&self) -> Self {
                    Exponent(&self.0 << 1u32)
                }
            }

            fn exponent(steps: Chain) -> BigUint {
                chain::exec(&Exponent(BigUint::from(1u8)), steps).0
            }

            fn modulus() -> BigUint {
                let hex = ::std::format!("{:x}", $fe::MODULUS);
                BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
            }

            #[test]
            fn invert_chain() {
                let steps = <$params as FieldParams<LIMBS>>::INVERT;
                assert_eq!(exponent(steps), modulus() - 2u8);
            }

            #[test]
            fn legendre_chain() {
                let steps = <$params as FieldParams<LIMBS>>::LEGENDRE;
                assert_eq!(exponent(steps), (modulus() - 1u8) >> 1u32);
            }

            #[test]
            fn sqrt_chain() {
                let p = modulus();
                match <$params as FieldParams<LIMBS>>::SQRT {
                    SqrtStrategy::ThreeModFour { chain } => {
                        assert_eq!(exponent(chain), (p + 1u8) >> 2u32);
                    }
                    SqrtStrategy::FiveModEight { chain, .. } => {
                        assert_eq!(exponent(chain), (p - 5u8) >> 3u32);
                    }
                    SqrtStrategy::General { chain } => {
                        assert_eq!(exponent(chain), (p + 1u8) >> 1u32);
                    }
                }
            }
        }
    };
}

/// Check that several backends compute identical results for one field.
///
/// Inputs are random raw integers reduced into `[0, p)` and used directly as Montgomery form
/// values. The first backend listed is the reference.
#[macro_export]
macro_rules! test_backend_conformance {
    ($params:ty, $uint:ty, [$reference:ty $(, $backend:ty)+ $(,)?]) => {
        mod backend_conformance {
            use super::*;
            use $crate::{Backend, FieldParams, bigint::Limb};

            use ::proptest::{collection::vec, prelude::*};

            const LIMBS: usize = <$uint>::LIMBS;
            const BYTES: usize = LIMBS * Limb::BYTES;

            fn reduced(bytes: &[u8]) -> $uint {
                let descriptor = <$params as FieldParams<LIMBS>>::DESCRIPTOR;
                let raw = <$uint>::from_le_slice(bytes);
                <$uint>::from_words($crate::reduce::reduce(raw.as_words(), &descriptor))
            }

            proptest! {
                #[test]
                fn backends_agree(
                    a in vec(any::<u8>(), BYTES),
                    b in vec(any::<u8>(), BYTES),
                ) {
                    let d = <$params as FieldParams<LIMBS>>::DESCRIPTOR;
                    let (a, b) = (reduced(&a), reduced(&b));

                    let add = <$reference as Backend<LIMBS>>::add(&a, &b, &d);
                    let sub = <$reference as Backend<LIMBS>>::sub(&a, &b, &d);
                    let neg = <$reference as Backend<LIMBS>>::neg(&a, &d);
                    let mul = <$reference as Backend<LIMBS>>::mul(&a, &b, &d);
                    let square = <$reference as Backend<LIMBS>>::square(&a, &d);

                    $(
                        prop_assert_eq!(<$backend as Backend<LIMBS>>::add(&a, &b, &d), add);
                        prop_assert_eq!(<$backend as Backend<LIMBS>>::sub(&a, &b, &d), sub);
                        prop_assert_eq!(<$backend as Backend<LIMBS>>::neg(&a, &d), neg);
                        prop_assert_eq!(<$backend as Backend<LIMBS>>::mul(&a, &b, &d), mul);
                        prop_assert_eq!(<$backend as Backend<LIMBS>>::square(&a, &d), square);
                    )+
                }
            }

            #[test]
            fn backends_agree_on_boundaries() {
                let d = <$params as FieldParams<LIMBS>>::DESCRIPTOR;
                let edges = [<$uint>::ZERO, <$uint>::ONE, d.one, d.minus_one, d.r2];

                for a in &edges {
                    for b in &edges {
                        let mul = <$reference as Backend<LIMBS>>::mul(a, b, &d);
                        let add = <$reference as Backend<LIMBS>>::add(a, b, &d);
                        let sub = <$reference as Backend<LIMBS>>::sub(a, b, &d);
                        $(
                            assert_eq!(<$backend as Backend<LIMBS>>::mul(a, b, &d), mul);
                            assert_eq!(<$backend as Backend<LIMBS>>::add(a, b, &d), add);
                            assert_eq!(<$backend as Backend<LIMBS>>::sub(a, b, &d), sub);
                        )+
                    }
                }
            }
        }
    };
}
