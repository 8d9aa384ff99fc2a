//! Sample inputs shared across tests

use crate::core::contact::ContactRecord;
use crate::core::sleep::TimeOfDay;
use crate::error::Result;

/// A record that passes every validation rule.
pub fn valid_contact() -> ContactRecord {
    ContactRecord::new("Jo", "a@b.com", "hi")
}

/// A record that fails every validation rule.
pub fn invalid_contact() -> ContactRecord {
    ContactRecord::new("", "bad", "")
}

/// `(height_cm, weight_kg, expected_bmi)` triples.
pub fn bmi_cases() -> Vec<(f64, f64, f64)> {
    vec![
        (180.0, 80.0, 24.7),
        (165.0, 55.0, 20.2),
        (200.0, 100.0, 25.0),
        (150.0, 90.0, 40.0),
    ]
}

/// `(bed, wake, expected_hours)` triples in `HH:MM` form.
pub fn sleep_cases() -> Vec<(&'static str, &'static str, f64)> {
    vec![
        ("23:00", "07:00", 8.0),
        ("22:30", "06:15", 7.8),
        ("06:00", "06:00", 0.0),
        ("00:00", "08:20", 8.3),
    ]
}

pub fn time(raw: &str) -> Result<TimeOfDay> {
    raw.parse()
}
