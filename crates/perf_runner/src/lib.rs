//! Benchmark driver for the instrumented binary insertion sort: generates
//! inputs, runs the sort under a timer and appends the counters to a CSV file.

pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use config::Config;
pub use error::RunnerError;
pub use report::CsvReport;
pub use runner::{RunMetrics, RunRecord, Summary, measure, run_all, run_case};
