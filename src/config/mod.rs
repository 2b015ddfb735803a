//! TOML configuration for the calculator and its shell.
//!
//! Validation uses Stillwater's `Validation` type so a bad file reports every
//! problem at once instead of one per run.
//!
//! # Example
//!
//! ```rust
//! use abacus::config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(
//!     r#"
//!     history_limit = 5
//!
//!     [logging]
//!     filter = "abacus=debug"
//!     "#,
//! )
//! .unwrap();
//!
//! let calc = config.builder().build().unwrap();
//! assert_eq!(calc.history().limit(), 5);
//! ```

use crate::builder::calculator::{check_history_limit, check_memory};
use crate::builder::{BuildError, CalculatorBuilder};
use crate::core::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigIssue};

/// Filter used when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Calculator configuration. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Number of history entries kept
    pub history_limit: usize,

    /// Memory register value at startup
    pub initial_memory: f64,

    pub logging: LoggingConfig,
}

/// Logging settings for the shell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            initial_memory: 0.0,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        match config.validate() {
            Validation::Success(()) => Ok(config),
            Validation::Failure(issues) => {
                Err(ConfigError::Invalid(issues.iter().cloned().collect()))
            }
        }
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Check every setting, accumulating ALL issues.
    ///
    /// Calculator settings are checked by the same rules the builder applies.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = vec![
            calculator_check(check_history_limit(self.history_limit)),
            calculator_check(check_memory(self.initial_memory)),
            if self.logging.filter.trim().is_empty() {
                Validation::fail(ConfigIssue::EmptyLogFilter)
            } else {
                Validation::success(())
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Calculator builder preloaded with these settings.
    pub fn builder(&self) -> CalculatorBuilder {
        CalculatorBuilder::new()
            .history_limit(self.history_limit)
            .memory(self.initial_memory)
    }
}

fn calculator_check<T>(result: Result<T, BuildError>) -> Validation<(), NonEmptyVec<ConfigIssue>> {
    match result {
        Ok(_) => Validation::success(()),
        Err(error) => Validation::fail(ConfigIssue::from(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = EngineConfig::from_toml_str("initial_memory = 4.5").unwrap();

        assert_eq!(config.initial_memory, 4.5);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn validation_accumulates_all_issues() {
        let config = EngineConfig {
            history_limit: 0,
            initial_memory: f64::NAN,
            logging: LoggingConfig {
                filter: "  ".to_string(),
            },
        };

        match config.validate() {
            Validation::Failure(issues) => {
                assert_eq!(issues.len(), 3);
                assert!(issues
                    .iter()
                    .any(|i| matches!(i, ConfigIssue::Calculator(BuildError::ZeroHistoryLimit))));
                assert!(issues.iter().any(|i| matches!(
                    i,
                    ConfigIssue::Calculator(BuildError::NonFiniteMemory(_))
                )));
                assert!(issues.iter().any(|i| matches!(i, ConfigIssue::EmptyLogFilter)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_success());
    }

    #[test]
    fn invalid_document_reports_issues() {
        let result = EngineConfig::from_toml_str("history_limit = 0");

        match result {
            Err(ConfigError::Invalid(issues)) => {
                assert_eq!(
                    issues,
                    vec![ConfigIssue::Calculator(BuildError::ZeroHistoryLimit)]
                );
            }
            other => panic!("Expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn valid_config_always_builds() {
        let config = EngineConfig::from_toml_str("history_limit = 1\ninitial_memory = -3.0").unwrap();
        assert!(config.builder().build().is_ok());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = EngineConfig::from_toml_str("history = 3");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let result = EngineConfig::load("/nonexistent/abacus.toml");

        match result {
            Err(ConfigError::Read { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/abacus.toml"));
            }
            other => panic!("Expected read error, got {other:?}"),
        }
    }

    #[test]
    fn builder_carries_settings() {
        let config = EngineConfig {
            history_limit: 2,
            initial_memory: 9.0,
            ..EngineConfig::default()
        };

        let calc = config.builder().build().unwrap();
        assert_eq!(calc.history().limit(), 2);
        assert_eq!(calc.memory(), 9.0);
    }
}
