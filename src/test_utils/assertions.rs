//! Assertion helpers for calculator and validation results

use crate::core::contact::{ContactField, ValidationErrors};

/// Asserts two floats agree to within `1e-9`.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {expected}, got {actual}"
    );
}

/// Asserts `errors` reports exactly `expected` and nothing else.
pub fn assert_field_errors(errors: &ValidationErrors, expected: &[(ContactField, &str)]) {
    let actual: Vec<(ContactField, &str)> = errors.iter().collect();
    let mut expected = expected.to_vec();
    expected.sort_by_key(|(field, _)| *field);
    assert_eq!(actual, expected, "Unexpected validation errors");
}
