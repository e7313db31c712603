//! The dataset analyzer
//!
//! [`DatasetAnalyzer`] owns an ordered, mutable sequence of `f64` values and
//! computes descriptive statistics over it on demand.
//!
//! # Empty and degenerate data
//!
//! An empty dataset is a normal state (for example right after
//! [`DatasetAnalyzer::clear_data`]), so statistics report it with `None`
//! instead of an error. The one exception is [`DatasetAnalyzer::range`], which
//! returns NaN for an empty dataset. That asymmetry is kept deliberately so
//! `range` stays a plain `max - min` over possibly-missing extremes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{validate_factor, AnalyzerConfig};
use crate::error::{AnalyzerError, ConfigError};
use crate::quantile;
use crate::summary::{FiveNumberSummary, SummaryStats};

/// Mutable numeric dataset with descriptive statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetAnalyzer {
    /// Stored values in insertion order
    values: Vec<f64>,
    #[serde(default)]
    config: AnalyzerConfig,
}

impl DatasetAnalyzer {
    /// Create an empty analyzer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer holding `data`
    pub fn with_data(data: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: data.into_iter().collect(),
            config: AnalyzerConfig::default(),
        }
    }

    /// Create an empty analyzer with a validated configuration
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            values: Vec::new(),
            config,
        })
    }

    /// Stored values in insertion order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the dataset holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Configuration used by [`DatasetAnalyzer::remove_outliers`]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    // === Mutation ===

    /// Append `data` to the dataset, preserving order
    pub fn add_data(&mut self, data: impl IntoIterator<Item = f64>) {
        let before = self.values.len();
        self.values.extend(data);
        tracing::debug!(
            added = self.values.len() - before,
            total = self.values.len(),
            "appended values"
        );
    }

    /// Append a dynamically typed value, which must be an array of numbers
    ///
    /// Nothing is appended if any element is rejected.
    pub fn add_json(&mut self, data: &Value) -> Result<(), AnalyzerError> {
        let Some(items) = data.as_array() else {
            tracing::warn!(kind = json_kind(data), "rejected non-array input");
            return Err(AnalyzerError::InvalidArgument(format!(
                "data must be an array, got {}",
                json_kind(data)
            )));
        };

        let parsed = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_f64().ok_or_else(|| {
                    tracing::warn!(index = i, kind = json_kind(item), "rejected array element");
                    AnalyzerError::InvalidArgument(format!(
                        "element {} must be a number, got {}",
                        i,
                        json_kind(item)
                    ))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        self.add_data(parsed);
        Ok(())
    }

    /// Parse `json` and append it with [`DatasetAnalyzer::add_json`]
    pub fn add_json_str(&mut self, json: &str) -> Result<(), AnalyzerError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| AnalyzerError::InvalidArgument(format!("malformed JSON: {}", e)))?;
        self.add_json(&value)
    }

    /// Remove every value
    pub fn clear_data(&mut self) {
        tracing::debug!(removed = self.values.len(), "cleared dataset");
        self.values.clear();
    }

    /// Ascending copy of the data; stored order is left untouched
    pub fn sorted_copy(&self) -> Vec<f64> {
        quantile::sorted(&self.values)
    }

    // === Central tendency ===

    /// Arithmetic mean
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.sum() / self.values.len() as f64)
    }

    /// Middle value of the sorted data, or the mean of the two middle values
    pub fn median(&self) -> Option<f64> {
        quantile::median_sorted(&self.sorted_copy())
    }

    /// All values sharing the highest frequency, ascending
    ///
    /// When no value repeats, every value is a mode.
    pub fn mode(&self) -> Option<Vec<f64>> {
        if self.values.is_empty() {
            return None;
        }

        // Runs of equal values in the sorted copy give the frequencies in
        // ascending value order.
        let sorted = self.sorted_copy();
        let mut runs: Vec<(f64, usize)> = Vec::new();
        for value in sorted {
            match runs.last_mut() {
                Some((last, count)) if *last == value => *count += 1,
                _ => runs.push((value, 1)),
            }
        }

        let max_count = runs.iter().map(|&(_, count)| count).max()?;
        Some(
            runs.into_iter()
                .filter(|&(_, count)| count == max_count)
                .map(|(value, _)| value)
                .collect(),
        )
    }

    // === Dispersion ===

    /// Population variance (divides by N)
    pub fn variance(&self) -> Option<f64> {
        let mean = self.mean()?;
        let squared: f64 = self.values.iter().map(|x| (x - mean).powi(2)).sum();
        Some(squared / self.values.len() as f64)
    }

    /// Population standard deviation
    pub fn standard_deviation(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    /// `max - min`
    ///
    /// Unlike the other statistics this returns NaN, not `None`, for an empty
    /// dataset.
    pub fn range(&self) -> f64 {
        let max = self.maximum().unwrap_or(f64::NAN);
        let min = self.minimum().unwrap_or(f64::NAN);
        max - min
    }

    /// Standard deviation as a percentage of the mean
    ///
    /// `None` when the dataset is empty or the mean is exactly zero.
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        let mean = self.mean()?;
        if mean == 0.0 {
            return None;
        }
        let std_dev = self.standard_deviation()?;
        Some(std_dev / mean * 100.0)
    }

    /// Smallest value
    pub fn minimum(&self) -> Option<f64> {
        self.values.iter().copied().min_by(f64::total_cmp)
    }

    /// Largest value
    pub fn maximum(&self) -> Option<f64> {
        self.values.iter().copied().max_by(f64::total_cmp)
    }

    /// Total of all values; 0 when empty
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Product of all values; 1 when empty
    pub fn product(&self) -> f64 {
        self.values.iter().product()
    }

    // === Position ===

    /// Percentile `p` in `[0, 100]` by linear interpolation
    ///
    /// Returns `None` for an empty dataset or an out-of-range `p`.
    pub fn percentile(&self, p: f64) -> Option<f64> {
        let result = quantile::percentile_sorted(&self.sorted_copy(), p);
        tracing::trace!(p, ?result, "computed percentile");
        result
    }

    /// Interquartile range `Q3 - Q1`
    pub fn iqr(&self) -> Option<f64> {
        let sorted = self.sorted_copy();
        let q1 = quantile::percentile_sorted(&sorted, 25.0)?;
        let q3 = quantile::percentile_sorted(&sorted, 75.0)?;
        Some(q3 - q1)
    }

    /// Inclusive fence `[Q1 - factor*IQR, Q3 + factor*IQR]`
    pub fn outlier_fence(&self, factor: f64) -> Option<(f64, f64)> {
        let sorted = self.sorted_copy();
        let q1 = quantile::percentile_sorted(&sorted, 25.0)?;
        let q3 = quantile::percentile_sorted(&sorted, 75.0)?;
        let iqr = q3 - q1;
        Some((q1 - factor * iqr, q3 + factor * iqr))
    }

    // === Scaling and filtering ===

    /// Min-max scale every value into `[0, 1]`
    ///
    /// A constant dataset maps to zeros; an empty one to an empty vector.
    pub fn normalize(&self) -> Vec<f64> {
        let (Some(min), Some(max)) = (self.minimum(), self.maximum()) else {
            return Vec::new();
        };

        if max == min {
            return vec![0.0; self.values.len()];
        }

        let span = max - min;
        self.values.iter().map(|v| (v - min) / span).collect()
    }

    /// Drop values outside the IQR fence using the configured factor
    ///
    /// Returns the number of values removed.
    pub fn remove_outliers(&mut self) -> usize {
        self.filter_outliers(self.config.outlier_factor)
    }

    /// Drop values outside the IQR fence for a caller-chosen factor
    ///
    /// Surviving values keep their original order. Returns the number of
    /// values removed.
    ///
    /// Quartiles come from the interpolating [`DatasetAnalyzer::percentile`],
    /// so for `[1..=9, 20, -20]` Q1 = 2.5 and Q3 = 7.5. A factor of 1.0 gives
    /// the fence `[-2.5, 12.5]` and strips only ±20; stripping down to
    /// `[2..=8]` takes a factor below 0.3, such as 0.2 (fence `[1.5, 8.5]`).
    pub fn remove_outliers_with_factor(&mut self, factor: f64) -> Result<usize, ConfigError> {
        validate_factor(factor)?;
        Ok(self.filter_outliers(factor))
    }

    fn filter_outliers(&mut self, factor: f64) -> usize {
        let Some((lower, upper)) = self.outlier_fence(factor) else {
            return 0;
        };

        let before = self.values.len();
        self.values.retain(|&v| v >= lower && v <= upper);
        let removed = before - self.values.len();

        tracing::debug!(factor, lower, upper, removed, "removed outliers");
        removed
    }

    // === Association ===

    /// Pearson correlation with an equal-length series
    ///
    /// Uses population covariance and standard deviations. Returns `None` if
    /// the lengths differ, the series are empty, or either series is constant.
    pub fn correlation(&self, other: &[f64]) -> Option<f64> {
        if other.len() != self.values.len() || other.is_empty() {
            return None;
        }

        let n = self.values.len() as f64;
        let mean_x = self.mean()?;
        let mean_y = other.iter().sum::<f64>() / n;

        let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
        for (x, y) in self.values.iter().zip(other) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            cov += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }

        let denominator = (var_x / n).sqrt() * (var_y / n).sqrt();
        if denominator == 0.0 {
            return None;
        }
        Some((cov / n) / denominator)
    }

    // === Summaries ===

    /// Snapshot of the common statistics; `None` when empty
    pub fn summary(&self) -> Option<SummaryStats> {
        SummaryStats::from_data(&self.values)
    }

    /// Minimum, quartiles and maximum; `None` when empty
    pub fn five_number_summary(&self) -> Option<FiveNumberSummary> {
        FiveNumberSummary::from_sorted(&self.sorted_copy())
    }
}

impl From<Vec<f64>> for DatasetAnalyzer {
    fn from(values: Vec<f64>) -> Self {
        Self {
            values,
            config: AnalyzerConfig::default(),
        }
    }
}

impl FromIterator<f64> for DatasetAnalyzer {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::with_data(iter)
    }
}

impl Extend<f64> for DatasetAnalyzer {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.add_data(iter);
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
