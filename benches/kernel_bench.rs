use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_complex::Complex64;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::hint::black_box;
use strided_base::{flatten2d, linspace_complex, Scalar, Summation, TypedBuffer};

fn random_grid(rows: usize, cols: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.sample(StandardNormal)).collect())
        .collect()
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten2d");
    for size in [64usize, 512] {
        let x = random_grid(size, size, 11);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("row_major", size), &size, |b, &n| {
            b.iter(|| flatten2d(&x, [black_box(n), n], false));
        });
        group.bench_with_input(BenchmarkId::new("colex", size), &size, |b, &n| {
            b.iter(|| flatten2d(&x, [black_box(n), n], true));
        });
    }
    group.finish();
}

fn bench_typed_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_sum");
    let len = 100_000usize;
    let mut rng = StdRng::seed_from_u64(5);
    let real: Vec<f64> = (0..len).map(|_| rng.sample(StandardNormal)).collect();
    let complex: Vec<Complex64> = real.iter().map(|&v| Complex64::new(v, -v)).collect();
    let real = TypedBuffer::from(real);
    let complex = TypedBuffer::from(complex);
    group.throughput(Throughput::Elements(len as u64));
    group.bench_function("float64", |b| {
        b.iter(|| real.sum(Summation::Kbn2, black_box(len), 1, 0));
    });
    group.bench_function("complex128", |b| {
        b.iter(|| complex.sum(Summation::Kbn2, black_box(len), 1, 0));
    });
    group.finish();
}

fn bench_linspace_complex(c: &mut Criterion) {
    let start = Scalar::from(Complex64::new(-1.0, 0.5));
    let stop = Scalar::from(Complex64::new(3.0, -2.0));
    c.bench_function("linspace_complex_10k", |b| {
        b.iter(|| linspace_complex(start, stop, black_box(10_000), true));
    });
}

criterion_group!(benches, bench_flatten, bench_typed_sum, bench_linspace_complex);
criterion_main!(benches);
