//! ipagg - CIDR list aggregator
//!
//! Reads a list of IPv4 or IPv6 CIDR blocks, aggregates them into the
//! smallest equivalent list, and checks the result against any expected
//! blocks declared in the list file.

mod config;
mod error;
mod input;
mod report;
mod telemetry;

use crate::config::{Config, LogConfig, LogFormat};
use crate::input::AddressList;
use crate::telemetry::{StageTimer, spans};
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: ipagg <list-file> [config.toml]";

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Results go to stdout; keep it clean.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match log.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let mut args = std::env::args().skip(1);
    let Some(list_path) = args.next() else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    // Load configuration
    let config = match args.next() {
        Some(path) => {
            Config::load(&path).with_context(|| format!("failed to load config {path}"))?
        }
        None => Config::default(),
    };

    init_tracing(&config.log);

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("refusing to run with {} configuration error(s)", errors.len());
    }

    let _run = spans::run(&list_path).entered();
    run(Path::new(&list_path), &config)
}

fn run(list_path: &Path, config: &Config) -> anyhow::Result<ExitCode> {
    let list = {
        let _timer = StageTimer::new("read");
        AddressList::read(list_path).inspect_err(|e| {
            error!(code = e.error_code(), error = %e, "Failed to read list");
        })?
    };
    info!(
        addresses = list.addresses.len(),
        expected = list.expected.len(),
        comments = list.comments,
        "Loaded address list"
    );

    let order = config.aggregate.order();
    let iterations = config.bench.iterations;
    let (results, stats) = {
        let timer = StageTimer::new("aggregate");
        let mut last = (Vec::new(), Default::default());
        for index in 0..iterations {
            let _iteration = spans::iteration(index).entered();
            last = ipagg_core::aggregate_mixed_with_stats(&list.addresses, order)
                .map_err(error::DriverError::from)
                .inspect_err(|e| {
                    error!(code = e.error_code(), error = %e, "Aggregation failed");
                })?;
        }
        if iterations > 1 {
            let mean = timer.elapsed() / iterations;
            info!(iterations, mean_us = mean.as_micros() as u64, "Timing run complete");
        }
        last
    };
    info!(
        input = stats.input,
        output = stats.output,
        merges = stats.merges,
        sweeps = stats.sweeps,
        "Aggregated"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_results(&mut out, &results, config.output.presentation()).inspect_err(|e| {
        error!(code = e.error_code(), error = %e, "Failed to write results");
    })?;
    if config.output.show_stats {
        report::write_stats(&mut out, &stats, iterations)?;
    }
    out.flush()?;

    if list.expected.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    let mismatch = report::compare(&list.expected, &results);
    if mismatch.is_empty() {
        info!(expected = list.expected.len(), "Results match expectations");
        return Ok(ExitCode::SUCCESS);
    }

    for cidr in &mismatch.missing {
        warn!(cidr = %cidr, "Expected block missing from results");
    }
    for cidr in &mismatch.unexpected {
        warn!(cidr = %cidr, "Unexpected block in results");
    }
    error!(
        missing = mismatch.missing.len(),
        unexpected = mismatch.unexpected.len(),
        "Results differ from expectations"
    );
    Ok(ExitCode::FAILURE)
}
