//! Shared datasets and test setup

use dataset_analyzer::DatasetAnalyzer;

/// Tolerance for floating point comparisons
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-9;

/// Analyzer holding 1 through 9 in ascending order
#[allow(dead_code)]
pub fn one_to_nine() -> DatasetAnalyzer {
    init_tracing();
    DatasetAnalyzer::with_data((1..=9).map(f64::from))
}

/// Empty analyzer
#[allow(dead_code)]
pub fn empty() -> DatasetAnalyzer {
    init_tracing();
    DatasetAnalyzer::new()
}

/// Route analyzer events to the test output; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert two floats agree within `tolerance`
#[allow(dead_code)]
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
