use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use turnover_core::pool::BrandPool;
use turnover_core::suggest::suggest;

fn bench_pool(size: usize) -> BrandPool {
    let prefixes = ["Acme", "Globex", "Initech", "Umbrella", "Stark", "Wayne"];
    let brands = (0..size)
        .map(|i| format!("{} {:04}", prefixes[i % prefixes.len()], i))
        .collect();
    BrandPool::from_brands(brands)
}

fn bench_history(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("Acme {i:04}")).collect()
}

static SIZES: &[usize] = &[100, 1_000, 10_000];

fn bench_cold(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest/cold");
    for &size in SIZES {
        let pool = bench_pool(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| suggest(pool, &[], "acme"));
        });
    }
    group.finish();
}

fn bench_with_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest/with_history");
    for &size in SIZES {
        let pool = bench_pool(size);
        let history = bench_history(50);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| suggest(pool, &history, "acme"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cold, bench_with_history);
criterion_main!(benches);
