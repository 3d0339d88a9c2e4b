//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and loading (Config, AggregateConfig, OutputConfig)
//! - [`defaults`]: serde default functions shared by the types
//! - [`validation`]: checks run before any work starts

mod defaults;
mod types;
mod validation;

pub use types::{Config, LogConfig, LogFormat};
pub use validation::validate;
