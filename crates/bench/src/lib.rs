use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` values drawn uniformly from `[min, max]`.
pub fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize, min: i64, max: i64) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(min..=max)).collect()
}

/// Ascending `0..len` with `len / 100` random swaps (at least one).
pub fn nearly_sorted<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    let mut data: Vec<i64> = (0..len as i64).collect();
    if len < 2 {
        return data;
    }
    for _ in 0..(len / 100).max(1) {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}

pub fn descending(len: usize) -> Vec<i64> {
    (0..len as i64).rev().collect()
}
