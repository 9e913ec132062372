use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use perf_runner::{Config, CsvReport, RunnerError, Summary, run_all};

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "perf_runner=debug"
    } else {
        "perf_runner=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> Result<Summary, RunnerError> {
    config.validate()?;

    let (mut report, path) = CsvReport::append_to(&config.output_dir, &config.file_name)?;
    info!(
        sizes = ?config.sizes,
        distributions = ?config.distributions,
        repetitions = config.repetitions,
        seed = config.seed,
        "starting binary insertion sort benchmarks"
    );

    let summary = run_all(config, &mut report)?;
    report.flush()?;

    info!(
        runs = summary.runs,
        failures = summary.failures,
        output = %path.display(),
        "benchmarks complete"
    );
    Ok(summary)
}

fn main() -> ExitCode {
    let config = Config::parse();
    init_tracing(config.verbose);

    match run(&config) {
        Ok(summary) if summary.failures == 0 => ExitCode::SUCCESS,
        Ok(summary) => {
            error!(failures = summary.failures, "some runs produced unsorted output");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(%err, "benchmark aborted");
            ExitCode::FAILURE
        }
    }
}
