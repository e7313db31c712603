//! Configuration for dataset-analyzer
//!
//! Holds the tunable parameters of the analyzer. Currently that is the
//! default IQR fence factor used by outlier removal.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Conventional "mild outlier" fence factor
pub const DEFAULT_OUTLIER_FACTOR: f64 = 1.5;

/// Analyzer configuration
///
/// Deserialization validates the values, so a config read from JSON or TOML
/// (including one nested in an analyzer snapshot) is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(try_from = "RawAnalyzerConfig")]
pub struct AnalyzerConfig {
    /// Multiplier `k` for the IQR fence `[Q1 - k*IQR, Q3 + k*IQR]`
    pub outlier_factor: f64,
}

/// Unvalidated wire form of [`AnalyzerConfig`]
#[derive(Deserialize)]
#[serde(default)]
struct RawAnalyzerConfig {
    outlier_factor: f64,
}

impl Default for RawAnalyzerConfig {
    fn default() -> Self {
        Self {
            outlier_factor: DEFAULT_OUTLIER_FACTOR,
        }
    }
}

impl TryFrom<RawAnalyzerConfig> for AnalyzerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawAnalyzerConfig) -> Result<Self, Self::Error> {
        let config = Self {
            outlier_factor: raw.outlier_factor,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            outlier_factor: DEFAULT_OUTLIER_FACTOR,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_factor(self.outlier_factor)
    }
}

/// A fence factor must be finite and non-negative
pub(crate) fn validate_factor(factor: f64) -> Result<(), ConfigError> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(ConfigError::InvalidFactor(factor));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.outlier_factor, 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_serialization() {
        let config = AnalyzerConfig { outlier_factor: 3.0 };
        let json = config.to_json().unwrap();
        let parsed = AnalyzerConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed = AnalyzerConfig::from_json("{}").unwrap();
        assert_eq!(parsed.outlier_factor, DEFAULT_OUTLIER_FACTOR);
    }

    #[test]
    fn test_negative_factor_rejected() {
        let err = AnalyzerConfig::from_json(r#"{"outlier_factor": -0.5}"#).unwrap_err();
        match err {
            ConfigError::Parse(msg) => assert!(msg.contains("Invalid outlier factor: -0.5")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_factor_rejected() {
        let config = AnalyzerConfig {
            outlier_factor: f64::INFINITY,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = AnalyzerConfig::from_json("{outlier_factor").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_toml_roundtrip() {
        let parsed = AnalyzerConfig::from_toml("outlier_factor = 3.0").unwrap();
        assert_eq!(parsed.outlier_factor, 3.0);
        let text = parsed.to_toml().unwrap();
        assert!(text.contains("outlier_factor"));
    }
}
