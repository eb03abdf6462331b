//! 128-bit field element benchmarks

use criterion::{criterion_group, criterion_main};
use p128::{Fp127, Fp128};

mod fp127 {
    use super::Fp127;

    ctfield::bench_field!(
        bench_fp127,
        "2^127 - 1",
        Fp127::from_be_hex("1ccbe91c075fc7f4f033bfa248db8fcc"),
        Fp127::from_be_hex("4e4014c68811f9a21a1fdb2c0e6113e0")
    );

    pub(super) fn bench(c: &mut criterion::Criterion) {
        bench_fp127(c);
    }
}

mod fp128 {
    use super::Fp128;

    ctfield::bench_field!(
        bench_fp128,
        "2^128 - 173",
        Fp128::from_be_hex("1ccbe91c075fc7f4f033bfa248db8fcc"),
        Fp128::from_be_hex("ce4014c68811f9a21a1fdb2c0e6113e0")
    );

    pub(super) fn bench(c: &mut criterion::Criterion) {
        bench_fp128(c);
    }
}

criterion_group!(benches, fp127::bench, fp128::bench);
criterion_main!(benches);
