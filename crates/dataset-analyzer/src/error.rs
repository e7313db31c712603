//! Error types for dataset-analyzer
//!
//! Empty or degenerate datasets are not errors: statistics report them
//! through `None` (or NaN for `range`). Errors are reserved for malformed
//! input and invalid configuration.

use thiserror::Error;

/// Error raised by the analyzer's mutation entry points
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum AnalyzerError {
    /// Input to an append operation was not a sequence of numbers
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors related to analyzer configuration
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum ConfigError {
    /// Outlier fence factor is negative or not finite
    #[error("Invalid outlier factor: {0}")]
    InvalidFactor(f64),

    /// Configuration text could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

#[cfg(feature = "toml-config")]
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
