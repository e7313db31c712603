//! Summary statistics for datasets
//!
//! Bundles the analyzer's individual statistics into serializable
//! snapshots:
//! - Mean, variance, standard deviation, coefficient of variation
//! - Min, max, range, sum
//! - Quartiles and interquartile range

use serde::{Deserialize, Serialize};

use crate::quantile;

/// Summary statistics for a non-empty numeric dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct SummaryStats {
    /// Number of values
    pub count: u64,
    /// Sum of all values
    pub sum: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Standard deviation as a percentage of the mean, absent when the mean is zero
    pub coefficient_of_variation: Option<f64>,
    /// First quartile (25th percentile)
    pub q1: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data, `None` if `data` is empty
    pub fn from_data(data: &[f64]) -> Option<Self> {
        let sorted = quantile::sorted(data);
        let min = *sorted.first()?;
        let max = *sorted.last()?;

        let count = sorted.len();
        let sum: f64 = data.iter().sum();
        let mean = sum / count as f64;

        let variance: f64 = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;
        let std_dev = variance.sqrt();

        let coefficient_of_variation = if mean == 0.0 {
            None
        } else {
            Some(std_dev / mean * 100.0)
        };

        Some(Self {
            count: count as u64,
            sum,
            min,
            max,
            mean,
            median: quantile::median_sorted(&sorted)?,
            variance,
            std_dev,
            coefficient_of_variation,
            q1: quantile::percentile_sorted(&sorted, 25.0)?,
            q3: quantile::percentile_sorted(&sorted, 75.0)?,
        })
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Get the interquartile range (q3 - q1)
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Tukey's five-number summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Build from ascending-sorted data
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        Some(Self {
            min: *sorted.first()?,
            q1: quantile::percentile_sorted(sorted, 25.0)?,
            median: quantile::median_sorted(sorted)?,
            q3: quantile::percentile_sorted(sorted, 75.0)?,
            max: *sorted.last()?,
        })
    }
}
