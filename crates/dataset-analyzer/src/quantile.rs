//! Order statistics over sorted slices
//!
//! Percentiles use the linear interpolation method: the rank of the
//! `p`-th percentile in a sorted sample of `n` values is `(p / 100) * (n - 1)`,
//! and non-integral ranks interpolate between the neighbouring order
//! statistics. Under this definition `percentile_sorted(data, 50.0)` equals
//! `median_sorted(data)`.

/// Return an ascending copy of `data`
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut values = data.to_vec();
    values.sort_by(f64::total_cmp);
    values
}

/// Percentile `p` (0 to 100 inclusive) of ascending-sorted data
///
/// Returns `None` for empty data or when `p` lies outside `[0, 100]`.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }

    let index = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        return Some(sorted[lower]);
    }

    let weight = index - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Median of ascending-sorted data
///
/// The rank of the 50th percentile falls on the middle element for odd
/// counts and halfway between the two middle elements for even counts, so
/// the median shares the percentile arithmetic.
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    percentile_sorted(sorted, 50.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_does_not_touch_input() {
        let data = vec![3.0, -1.0, 2.0];
        assert_eq!(sorted(&data), vec![-1.0, 2.0, 3.0]);
        assert_eq!(data, vec![3.0, -1.0, 2.0]);
    }

    #[test]
    fn test_percentile_bounds() {
        let data: Vec<f64> = (1..=9).map(|x| x as f64).collect();
        assert_eq!(percentile_sorted(&data, 0.0), Some(1.0));
        assert_eq!(percentile_sorted(&data, 100.0), Some(9.0));
        assert_eq!(percentile_sorted(&data, -0.1), None);
        assert_eq!(percentile_sorted(&data, 100.1), None);
        assert_eq!(percentile_sorted(&data, f64::NAN), None);
    }

    #[test]
    fn test_percentile_interpolates() {
        let data: Vec<f64> = (1..=9).map(|x| x as f64).collect();
        let p30 = percentile_sorted(&data, 30.0).unwrap();
        assert!((p30 - 3.4).abs() < 1e-10);

        let data = vec![10.0, 20.0];
        assert_eq!(percentile_sorted(&data, 25.0), Some(12.5));
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile_sorted(&[7.0], 0.0), Some(7.0));
        assert_eq!(percentile_sorted(&[7.0], 63.0), Some(7.0));
    }

    #[test]
    fn test_percentile_empty() {
        assert_eq!(percentile_sorted(&[], 50.0), None);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median_sorted(&[]), None);
    }

    #[test]
    fn test_median_of_inexact_pair() {
        let data = [0.1, 0.7];
        let median = median_sorted(&data).unwrap();
        assert_eq!(percentile_sorted(&data, 50.0), Some(median));
        assert!((median - 0.4).abs() < 1e-15);
    }

    #[test]
    fn test_percentile_extreme_magnitudes() {
        let data = [-f64::MAX, f64::MAX];
        assert_eq!(median_sorted(&data), Some(0.0));
    }

    #[test]
    fn test_fiftieth_percentile_is_median() {
        for n in 1..=12 {
            let data: Vec<f64> = (0..n).map(|x| (x * x) as f64 * 0.5).collect();
            assert_eq!(percentile_sorted(&data, 50.0), median_sorted(&data));
        }
    }
}
