use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{
    apply_large_runtime_config, apply_small_runtime_config, default_rng, descending,
    nearly_sorted, random_values,
};
use chaotic_sort::{ProgressCadence, SortConfig, SortVariant, sort, variant_name};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const NAIVE_SIZES: [usize; 3] = [1024, 4096, 16384];
const BATCHED_SIZES: [usize; 3] = [4096, 16384, 65536];
const VALUE_RANGE: i64 = 1_000_000;

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    Descending,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Descending => "descending",
        }
    }
}

const DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Descending,
];

fn generate_dataset(dist: Distribution, size: usize) -> Vec<i64> {
    let mut rng = default_rng();
    match dist {
        Distribution::RandomUniform => random_values(&mut rng, size, -VALUE_RANGE, VALUE_RANGE),
        Distribution::NearlySorted1pctSwaps => nearly_sorted(&mut rng, size),
        Distribution::Descending => descending(size),
    }
}

fn bench_variants(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("chaotic_sort/{}", dist.label()));

        for (variant, sizes) in [
            (SortVariant::Naive, &NAIVE_SIZES[..]),
            (SortVariant::Batched, &BATCHED_SIZES[..]),
        ] {
            let config = SortConfig::default()
                .with_variant(variant)
                .with_seed(0x5EED_2026)
                .with_progress(ProgressCadence::Never);

            for &size in sizes {
                if size <= 16384 {
                    apply_small_runtime_config(&mut group);
                } else {
                    apply_large_runtime_config(&mut group);
                }
                let base = generate_dataset(dist, size);

                group.bench_function(BenchmarkId::new(variant_name(variant), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let start = Instant::now();
                            let outcome = sort(black_box(&base), &config);
                            total += start.elapsed();
                            black_box(outcome.ok());
                        }
                        total
                    });
                });
            }
        }

        for &size in &BATCHED_SIZES {
            apply_large_runtime_config(&mut group);
            let base = generate_dataset(dist, size);
            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
