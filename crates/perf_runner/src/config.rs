use std::path::PathBuf;

use bench::{ALL_DISTRIBUTIONS, Distribution, RNG_SEED};
use clap::Parser;

use crate::error::RunnerError;

pub const DEFAULT_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

#[derive(Parser, Debug, Clone)]
#[command(
    name = "perf-runner",
    version,
    about = "Run the instrumented binary insertion sort and append its counters to a CSV file"
)]
pub struct Config {
    /// Input sizes, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    pub sizes: Vec<usize>,

    /// Input distributions: random, sorted, reverse-sorted, nearly-sorted
    #[arg(long, value_delimiter = ',', default_values_t = ALL_DISTRIBUTIONS)]
    pub distributions: Vec<Distribution>,

    #[arg(long, default_value = "performance-data")]
    pub output_dir: PathBuf,

    #[arg(long, default_value = "performance_data.csv")]
    pub file_name: String,

    /// Seed for input generation
    #[arg(long, default_value_t = RNG_SEED)]
    pub seed: u64,

    /// Runs per (size, distribution) pair
    #[arg(long, default_value_t = 1)]
    pub repetitions: usize,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), RunnerError> {
        if self.sizes.is_empty() {
            return Err(RunnerError::InvalidConfig("no input sizes given".into()));
        }
        if self.sizes.contains(&0) {
            return Err(RunnerError::InvalidConfig(
                "input sizes must be positive".into(),
            ));
        }
        if self.distributions.is_empty() {
            return Err(RunnerError::InvalidConfig("no distributions given".into()));
        }
        if self.repetitions == 0 {
            return Err(RunnerError::InvalidConfig(
                "repetitions must be at least 1".into(),
            ));
        }
        if self.file_name.trim().is_empty() {
            return Err(RunnerError::InvalidConfig("empty output file name".into()));
        }
        Ok(())
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("perf-runner").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_the_reference_benchmark() {
        let config = parse(&[]);
        assert_eq!(config.sizes, DEFAULT_SIZES);
        assert_eq!(config.distributions, ALL_DISTRIBUTIONS);
        assert_eq!(
            config.output_path(),
            PathBuf::from("performance-data").join("performance_data.csv")
        );
        assert_eq!(config.seed, RNG_SEED);
        assert_eq!(config.repetitions, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn comma_separated_lists() {
        let config = parse(&[
            "--sizes",
            "10,20",
            "--distributions",
            "sorted,REVERSE_SORTED",
            "--repetitions",
            "3",
        ]);
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(
            config.distributions,
            vec![Distribution::Sorted, Distribution::ReverseSorted]
        );
        assert_eq!(config.repetitions, 3);
    }

    #[test]
    fn unknown_distribution_is_rejected_by_the_parser() {
        let result = Config::try_parse_from(["perf-runner", "--distributions", "zigzag"]);
        assert!(result.is_err());
    }

    #[test]
    fn validation_failures() {
        for args in [
            &["--sizes", "0"][..],
            &["--repetitions", "0"][..],
            &["--file-name", " "][..],
        ] {
            let config = parse(args);
            assert!(
                matches!(config.validate(), Err(RunnerError::InvalidConfig(_))),
                "args={args:?}"
            );
        }
    }
}
