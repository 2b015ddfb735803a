//! Configuration error types.

use crate::builder::BuildError;
use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigIssue {
    /// A calculator setting the builder would reject
    #[error(transparent)]
    Calculator(#[from] BuildError),

    #[error("logging.filter must not be empty")]
    EmptyLogFilter,
}

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this configuration
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Every issue found during validation
    #[error("Invalid config: {}", format_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
