//! Driver errors.
//!
//! Library failures arrive as [`ipagg_core::ParseError`] or
//! [`ipagg_core::InvalidArgument`]; this module adds the context of the
//! list file they came from.

use ipagg_core::{InvalidArgument, ParseError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("cannot aggregate: {0}")]
    Aggregate(#[from] InvalidArgument),

    #[error("cannot render results: {0}")]
    Render(#[source] InvalidArgument),

    #[error("failed to write results: {0}")]
    Write(#[from] std::io::Error),
}

impl DriverError {
    /// Get a static error code string for log labeling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read",
            Self::InvalidLine { .. } => "invalid_line",
            Self::Aggregate(_) => "aggregate",
            Self::Render(_) => "render",
            Self::Write(_) => "write",
        }
    }
}
