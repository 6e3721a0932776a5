//! Interval insertion and containment benchmarks.
//!
//! These benchmarks measure the boundary-array algebra under randomized
//! workloads: building sets through repeated coalescing insertions, and
//! probing large sets across the linear/binary search threshold.
//!
//! Run with:
//! ```bash
//! cargo bench --bench insert
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ics_rs::set::IntervalSet;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const DOMAIN: u32 = 1_000_000;

fn build_random_set(inserts: usize, width: u32, seed: u64) -> IntervalSet<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut set = IntervalSet::new();
    for _ in 0..inserts {
        let low = rng.gen_range(0..DOMAIN);
        let high = low + rng.gen_range(1..=width);
        set.insert_interval(low, high);
    }
    set
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_interval");
    for &inserts in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(inserts as u64));
        group.bench_with_input(
            BenchmarkId::new("sparse", inserts),
            &inserts,
            |b, &inserts| b.iter(|| build_random_set(inserts, 16, 42)),
        );
        group.bench_with_input(
            BenchmarkId::new("coalescing", inserts),
            &inserts,
            |b, &inserts| b.iter(|| build_random_set(inserts, 4_096, 42)),
        );
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    for &inserts in &[16usize, 10_000] {
        let set = build_random_set(inserts, 16, 7);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let probes: Vec<u32> = (0..1024).map(|_| rng.gen_range(0..DOMAIN)).collect();

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(set.boundaries().len()),
            &set,
            |b, set| b.iter(|| probes.iter().filter(|e| set.contains(e)).count()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains);
criterion_main!(benches);
