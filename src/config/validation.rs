//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use ipagg_core::{Order, Presentation};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("aggregate.order: {0}")]
    InvalidOrder(ipagg_core::InvalidArgument),
    #[error("output.presentation: {0}")]
    InvalidPresentation(ipagg_core::InvalidArgument),
    #[error("bench.iterations must be at least 1")]
    ZeroIterations,
    #[error("log.level is not a valid filter directive: '{0}'")]
    InvalidLogLevel(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.aggregate.order.parse::<Order>() {
        errors.push(ValidationError::InvalidOrder(e));
    }
    if let Err(e) = config.output.presentation.parse::<Presentation>() {
        errors.push(ValidationError::InvalidPresentation(e));
    }
    if config.bench.iterations == 0 {
        errors.push(ValidationError::ZeroIterations);
    }
    if EnvFilter::try_new(&config.log.level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.log.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_all_errors_collected() {
        let toml = r#"
[aggregate]
order = "wombat"

[output]
presentation = "roman"

[bench]
iterations = 0
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidOrder(_))));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidPresentation(_))));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::ZeroIterations)));
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let config: Config = toml::from_str("[aggregate]\norder = \"wombat\"").unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "aggregate.order: unknown input order \"wombat\""
        );
    }
}
