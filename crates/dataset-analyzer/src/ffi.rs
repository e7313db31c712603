//! Shared handle for embedding the analyzer.
//!
//! [`DatasetAnalyzer`] is single-owner and takes `&mut self` for mutation.
//! Hosts that need to share one dataset (or hand it across an FFI boundary)
//! use [`DatasetAnalyzerHandle`], which puts the whole analyzer behind a
//! single mutex. Every method takes the lock once, so each call observes a
//! consistent dataset.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::analyzer::DatasetAnalyzer;
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, ConfigError};
use crate::summary::{FiveNumberSummary, SummaryStats};

/// Thread-safe handle to a dataset analyzer.
///
/// This is the entry point for Swift/Kotlin code when the `uniffi`
/// feature is enabled.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct DatasetAnalyzerHandle {
    analyzer: Arc<Mutex<DatasetAnalyzer>>,
}

impl DatasetAnalyzerHandle {
    /// Wrap an existing analyzer
    pub fn from_analyzer(analyzer: DatasetAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(Mutex::new(analyzer)),
        }
    }

    /// Run `f` with exclusive access to the analyzer
    pub fn with_analyzer<R>(&self, f: impl FnOnce(&mut DatasetAnalyzer) -> R) -> R {
        f(&mut self.lock())
    }

    // Every operation leaves the analyzer valid, so a poisoned lock is
    // still safe to use.
    fn lock(&self) -> MutexGuard<'_, DatasetAnalyzer> {
        self.analyzer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl DatasetAnalyzerHandle {
    /// Create a handle holding `data`
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new(data: Vec<f64>) -> Self {
        Self::from_analyzer(DatasetAnalyzer::from(data))
    }

    /// Create an empty handle with a custom configuration
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_analyzer(DatasetAnalyzer::with_config(config)?))
    }

    pub fn add_data(&self, data: Vec<f64>) {
        self.lock().add_data(data);
    }

    /// Append a JSON array of numbers
    pub fn add_json(&self, json: String) -> Result<(), AnalyzerError> {
        self.lock().add_json_str(&json)
    }

    pub fn clear_data(&self) {
        self.lock().clear_data();
    }

    /// Copy of the stored values in insertion order
    pub fn values(&self) -> Vec<f64> {
        self.lock().values().to_vec()
    }

    pub fn len(&self) -> u64 {
        self.lock().len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn sorted_copy(&self) -> Vec<f64> {
        self.lock().sorted_copy()
    }

    pub fn mean(&self) -> Option<f64> {
        self.lock().mean()
    }

    pub fn median(&self) -> Option<f64> {
        self.lock().median()
    }

    pub fn mode(&self) -> Option<Vec<f64>> {
        self.lock().mode()
    }

    pub fn variance(&self) -> Option<f64> {
        self.lock().variance()
    }

    pub fn standard_deviation(&self) -> Option<f64> {
        self.lock().standard_deviation()
    }

    /// `max - min`, NaN when empty
    pub fn range(&self) -> f64 {
        self.lock().range()
    }

    pub fn coefficient_of_variation(&self) -> Option<f64> {
        self.lock().coefficient_of_variation()
    }

    pub fn minimum(&self) -> Option<f64> {
        self.lock().minimum()
    }

    pub fn maximum(&self) -> Option<f64> {
        self.lock().maximum()
    }

    pub fn sum(&self) -> f64 {
        self.lock().sum()
    }

    pub fn product(&self) -> f64 {
        self.lock().product()
    }

    pub fn percentile(&self, p: f64) -> Option<f64> {
        self.lock().percentile(p)
    }

    pub fn normalize(&self) -> Vec<f64> {
        self.lock().normalize()
    }

    /// Remove outliers with the configured factor, returning how many were dropped
    pub fn remove_outliers(&self) -> u64 {
        self.lock().remove_outliers() as u64
    }

    /// Remove outliers with a custom factor, returning how many were dropped
    pub fn remove_outliers_with_factor(&self, factor: f64) -> Result<u64, ConfigError> {
        self.lock()
            .remove_outliers_with_factor(factor)
            .map(|removed| removed as u64)
    }

    pub fn correlation(&self, other: Vec<f64>) -> Option<f64> {
        self.lock().correlation(&other)
    }

    pub fn summary(&self) -> Option<SummaryStats> {
        self.lock().summary()
    }

    pub fn five_number_summary(&self) -> Option<FiveNumberSummary> {
        self.lock().five_number_summary()
    }
}
