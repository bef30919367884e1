use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bigdet::random::uniform_matrix;
use bigdet::reconstruct::{reconstruct, Precision};

// ---------------------------------------------------------------------------
// LU log-determinant
// ---------------------------------------------------------------------------

fn slogdet(c: &mut Criterion) {
    let mut g = c.benchmark_group("slogdet");

    for n in [16, 64, 256, 512] {
        let a = uniform_matrix(n, Some(n as u64));
        g.bench_with_input(BenchmarkId::from_parameter(n), &a, |b, a| {
            b.iter(|| std::hint::black_box(a).slogdet())
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Decimal reconstruction
// ---------------------------------------------------------------------------

fn reconstruct_digits(c: &mut Criterion) {
    let mut g = c.benchmark_group("reconstruct");
    let ld = uniform_matrix(128, Some(9)).slogdet();

    for digits in [20, 100, 500] {
        let precision = Precision::new(digits).unwrap();
        g.bench_with_input(BenchmarkId::from_parameter(digits), &precision, |b, &p| {
            b.iter(|| reconstruct(std::hint::black_box(&ld), p).unwrap())
        });
    }

    g.finish();
}

criterion_group!(benches, slogdet, reconstruct_digits);
criterion_main!(benches);
