//! Core configuration types and loading.

use ipagg_core::{Order, Presentation};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{default_iterations, default_log_level, default_order, default_presentation};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Driver configuration. Every section and field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Aggregation settings.
    #[serde(default)]
    pub aggregate: AggregateConfig,
    /// How results are written.
    #[serde(default)]
    pub output: OutputConfig,
    /// Repetition for timing runs.
    #[serde(default)]
    pub bench: BenchConfig,
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// `[aggregate]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregateConfig {
    /// Input order token: "unsorted" or "presorted" (default: "unsorted").
    #[serde(default = "default_order")]
    pub order: String,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
        }
    }
}

impl AggregateConfig {
    /// The configured order. Falls back to the default for a token that
    /// validation would have rejected.
    pub fn order(&self) -> Order {
        self.order.parse().unwrap_or_default()
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Presentation token for result addresses (default: "string").
    #[serde(default = "default_presentation")]
    pub presentation: String,
    /// Append a stats comment line after the results (default: false).
    #[serde(default)]
    pub show_stats: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            presentation: default_presentation(),
            show_stats: false,
        }
    }
}

impl OutputConfig {
    /// The configured presentation, or the default for a token that
    /// validation would have rejected.
    pub fn presentation(&self) -> Presentation {
        self.presentation.parse().unwrap_or_default()
    }
}

/// `[bench]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchConfig {
    /// Times to run the aggregation; only the last result is printed (default: 1).
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// `[log]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (default: text).
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.aggregate.order(), Order::Unsorted);
        assert_eq!(config.output.presentation(), Presentation::String);
        assert!(!config.output.show_stats);
        assert_eq!(config.bench.iterations, 1);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
[aggregate]
order = "presorted"

[output]
presentation = "full"
show_stats = true

[bench]
iterations = 50

[log]
level = "debug"
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.aggregate.order(), Order::Presorted);
        assert_eq!(config.output.presentation(), Presentation::Full);
        assert!(config.output.show_stats);
        assert_eq!(config.bench.iterations, 50);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(toml::from_str::<Config>("[log]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/ipagg.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
