use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::hint::black_box;
use strided_kernel::{nrm2, rev, sorthp, sortsh, sum_with, Summation};

fn random_vec(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.sample(StandardNormal)).collect()
}

fn bench_summation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    for len in [1_000usize, 100_000] {
        let x = random_vec(len, 42);
        group.throughput(Throughput::Elements(len as u64));
        for strategy in [
            Summation::Ordinary,
            Summation::Pairwise,
            Summation::Kbn,
            Summation::Kbn2,
        ] {
            group.bench_with_input(BenchmarkId::new(strategy.as_str(), len), &len, |b, &n| {
                b.iter(|| sum_with(strategy, black_box(n), &x, 1));
            });
        }
        group.bench_with_input(BenchmarkId::new("kbn2_stride_-2", len), &len, |b, &n| {
            b.iter(|| sum_with(Summation::Kbn2, black_box(n / 2), &x, -2));
        });
    }
    group.finish();
}

fn bench_nrm2(c: &mut Criterion) {
    let mut group = c.benchmark_group("nrm2");
    for len in [1_000usize, 100_000] {
        let x = random_vec(len, 7);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("contiguous", len), &len, |b, &n| {
            b.iter(|| nrm2(black_box(n), &x, 1));
        });
    }
    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let len = 10_000usize;
    let x = random_vec(len, 3);
    group.throughput(Throughput::Elements(len as u64));
    group.bench_function("rev", |b| {
        let mut y = x.clone();
        b.iter(|| {
            rev(len, &mut y, 1);
        });
    });
    group.bench_function("sorthp", |b| {
        b.iter(|| {
            let mut y = x.clone();
            sorthp(len, 1.0, &mut y, 1);
            y
        });
    });
    group.bench_function("sortsh", |b| {
        b.iter(|| {
            let mut y = x.clone();
            sortsh(len, 1.0, &mut y, 1);
            y
        });
    });
    group.finish();
}

criterion_group!(benches, bench_summation, bench_nrm2, bench_transforms);
criterion_main!(benches);
