//! Calculators and form validation behind the Vitality Source site.
//!
//! The [`crate::core`] module holds the pure logic (BMI, sleep duration, contact
//! validation). [`theme`] persists the dark-mode preference and
//! [`delivery`] receives contact messages once they validate.

pub mod core;
pub mod delivery;
pub mod error;
pub mod logging;
pub mod test_utils;
pub mod theme;
pub mod utils;

pub use crate::core::{
    compute_bmi, compute_sleep_hours, compute_sleep_hours_hm, validate, BmiResult, ContactField,
    ContactRecord, SleepResult, TimeOfDay, ValidationErrors,
};
pub use error::{Result, VitalityError};
