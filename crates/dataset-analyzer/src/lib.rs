//! dataset-analyzer - Descriptive statistics over a mutable numeric dataset
//!
//! This crate provides a single stateful analyzer and the primitives it is
//! built from:
//!
//! - **DatasetAnalyzer**: owned `Vec<f64>` with append/clear and on-demand
//!   statistics (mean, median, mode, variance, percentiles, outliers, ...)
//! - **Quantiles**: linear-interpolation percentiles over sorted slices
//! - **Summaries**: serializable snapshots of the common statistics
//! - **DatasetAnalyzerHandle**: mutex-guarded handle for shared or FFI use
//!
//! # Empty datasets
//!
//! An empty dataset is a valid state, not an error. Statistics return `None`
//! for it, except `range()` which yields NaN, and `sum()`/`product()` which
//! return their identities (0 and 1).
//!
//! ```
//! use dataset_analyzer::DatasetAnalyzer;
//!
//! let mut analyzer = DatasetAnalyzer::with_data((1..=9).map(f64::from));
//! assert_eq!(analyzer.mean(), Some(5.0));
//! assert_eq!(analyzer.percentile(50.0), analyzer.median());
//!
//! analyzer.clear_data();
//! assert_eq!(analyzer.mean(), None);
//! assert!(analyzer.range().is_nan());
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod ffi;
pub mod quantile;
pub mod summary;

pub use analyzer::DatasetAnalyzer;
pub use config::{AnalyzerConfig, DEFAULT_OUTLIER_FACTOR};
pub use error::{AnalyzerError, ConfigError};
pub use ffi::DatasetAnalyzerHandle;
pub use summary::{FiveNumberSummary, SummaryStats};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
