//! Telemetry utilities for stage timing and run correlation.

use std::time::{Duration, Instant};
use tracing::info;

/// Guard for timing a driver stage.
///
/// Emits an `info!` event with the elapsed time when dropped.
pub struct StageTimer {
    stage: &'static str,
    start: Instant,
}

impl StageTimer {
    /// Start timing a stage.
    pub fn new(stage: &'static str) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }

    /// Time since the stage started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for StageTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        info!(
            stage = self.stage,
            elapsed_us = elapsed.as_micros() as u64,
            "Stage finished"
        );
    }
}

/// Standardized span constructors for driver observability.
pub mod spans {
    use tracing::{Span, debug_span, info_span};

    /// Create a span for one run over a list file.
    pub fn run(list: &str) -> Span {
        info_span!("run", list = %list)
    }

    /// Create a span for one aggregation pass of a timing run.
    pub fn iteration(index: u32) -> Span {
        debug_span!("iteration", index)
    }
}
