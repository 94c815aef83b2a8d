use criterion::{criterion_group, criterion_main, Criterion};
use math::pythagorean_triplet;

fn run_all_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("pythagorean_triplet");
    group.bench_function("perimeter_120", |b| b.iter(|| pythagorean_triplet(120)));
    group.bench_function("perimeter_1000", |b| b.iter(|| pythagorean_triplet(1000)));
    // Odd perimeters have no triple, so the search runs to exhaustion
    group.bench_function("perimeter_999_miss", |b| b.iter(|| pythagorean_triplet(999)));
    group.finish();
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
