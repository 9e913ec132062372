use std::io::Write;
use std::time::{Duration, Instant};

use bench::{Distribution, generate, seed_for, seeded_rng};
use insertion_sort::{
    CounterSnapshot, Counters, binary_insertion_sort, comparison_bound, is_sorted_non_decreasing,
};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::RunnerError;
use crate::report::CsvReport;

/// Counters and wall-clock time of one sort invocation.
#[derive(Clone, Copy, Debug)]
pub struct RunMetrics {
    pub counters: CounterSnapshot,
    pub elapsed: Duration,
}

/// One CSV row.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RunRecord {
    pub input_size: usize,
    pub distribution: &'static str,
    pub repetition: usize,
    pub time_ns: u64,
    pub comparisons: u64,
    pub shifts: u64,
    pub array_accesses: u64,
    pub sorted: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub runs: usize,
    pub failures: usize,
}

/// Resets `counters`, sorts `data` under a timer and reads the counters back.
pub fn measure(data: &mut [i32], counters: &mut Counters) -> RunMetrics {
    counters.reset();
    let start = Instant::now();
    binary_insertion_sort(data, counters);
    let elapsed = start.elapsed();
    RunMetrics {
        counters: counters.snapshot(),
        elapsed,
    }
}

pub fn run_case(
    dist: Distribution,
    size: usize,
    seed: u64,
    repetition: usize,
    counters: &mut Counters,
) -> RunRecord {
    let mut rng = seeded_rng(seed_for(seed.wrapping_add(repetition as u64), dist, size));
    let mut data = generate(dist, size, &mut rng);

    let metrics = measure(&mut data, counters);

    RunRecord {
        input_size: size,
        distribution: dist.label(),
        repetition,
        time_ns: u64::try_from(metrics.elapsed.as_nanos()).unwrap_or(u64::MAX),
        comparisons: metrics.counters.comparisons,
        shifts: metrics.counters.shifts,
        array_accesses: metrics.counters.array_accesses,
        sorted: data.len() == size && is_sorted_non_decreasing(&data),
    }
}

/// Runs every (size, distribution, repetition) case in order and writes one
/// row per run. Unsorted output is counted as a failure but does not stop the
/// remaining runs.
pub fn run_all<W: Write>(
    config: &Config,
    report: &mut CsvReport<W>,
) -> Result<Summary, RunnerError> {
    let mut counters = Counters::new();
    let mut summary = Summary::default();

    for &size in &config.sizes {
        for &dist in &config.distributions {
            for repetition in 0..config.repetitions {
                debug!(size, distribution = %dist, repetition, "running");
                let record = run_case(dist, size, config.seed, repetition, &mut counters);

                if !record.sorted {
                    error!(size, distribution = %dist, repetition, "output was not sorted");
                    summary.failures += 1;
                }
                let bound = comparison_bound(size);
                if record.comparisons > bound {
                    warn!(
                        size,
                        distribution = %dist,
                        comparisons = record.comparisons,
                        bound,
                        "comparisons exceed n * ceil(log2(n + 1))"
                    );
                }
                info!(
                    size,
                    distribution = %dist,
                    repetition,
                    time_ns = record.time_ns,
                    comparisons = record.comparisons,
                    shifts = record.shifts,
                    array_accesses = record.array_accesses,
                    "run finished"
                );

                report.write(&record)?;
                summary.runs += 1;
            }
        }
    }

    Ok(summary)
}
