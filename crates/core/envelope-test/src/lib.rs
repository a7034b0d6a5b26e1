//! Shared fixtures for the workspace integration tests.

use envelope_core::{PayloadUnit, UsageParameters};

/// One million users, five 1 KB writes each, ten reads per write, with the
/// round-number constants.
pub fn reference_workload() -> UsageParameters {
    UsageParameters::default()
        .with_dau(1_000_000)
        .with_writes_per_user(5.0)
        .with_read_write_ratio(10.0)
        .with_payload(1.0, PayloadUnit::KB)
        .with_precision_mode(false)
}

/// Relative comparison for quantities that pass through non-dyadic factors.
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-12;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
