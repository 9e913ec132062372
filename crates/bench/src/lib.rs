use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod inputs;

pub use inputs::{ALL_DISTRIBUTIONS, Distribution, UnknownDistribution, generate};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
pub const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

/// For quadratic workloads where a single iteration can take milliseconds.
pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    seeded_rng(RNG_SEED)
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Derives a per-case seed so every (distribution, size) pair gets an
/// independent but reproducible stream.
#[inline]
pub fn seed_for(base: u64, dist: Distribution, size: usize) -> u64 {
    let d = match dist {
        Distribution::Random => 11_u64,
        Distribution::Sorted => 12_u64,
        Distribution::ReverseSorted => 13_u64,
        Distribution::NearlySorted => 14_u64,
    };
    mix_seed(base ^ (d << 48) ^ (size as u64))
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_differ_per_case() {
        let a = seed_for(RNG_SEED, Distribution::Random, 100);
        let b = seed_for(RNG_SEED, Distribution::Random, 1000);
        let c = seed_for(RNG_SEED, Distribution::NearlySorted, 100);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, seed_for(RNG_SEED, Distribution::Random, 100));
    }

    #[test]
    fn same_seed_same_input() {
        let first = generate(Distribution::Random, 256, &mut seeded_rng(7));
        let second = generate(Distribution::Random, 256, &mut seeded_rng(7));
        assert_eq!(first, second);
    }
}
