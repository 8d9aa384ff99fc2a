//! Core calculation and validation logic
//!
//! Pure functions behind the site's tools: the BMI and sleep calculators and
//! the contact form rules. Nothing in here touches the filesystem, the
//! terminal, or any shared state, so every function is safe to call
//! repeatedly and from anywhere.

pub mod bmi;
pub mod contact;
pub mod sleep;

pub use bmi::{compute_bmi, gauge_segments, parse_measurement, BmiResult, GAUGE_CEILING};
pub use contact::{
    submit, validate, ContactField, ContactRecord, MessageDelivery, SubmissionOutcome,
    ValidationErrors,
};
pub use sleep::{compute_sleep_hours, compute_sleep_hours_hm, SleepResult, TimeOfDay};

/// Rounds to one decimal place, halves away from zero.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod bmi_proptest;

#[cfg(test)]
mod sleep_proptest;

#[cfg(test)]
mod contact_proptest;
