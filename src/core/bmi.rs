//! Body-mass-index calculation.

use serde::Serialize;

use super::round_one_decimal;
use crate::error::{Result, VitalityError};

/// Upper bound of the BMI gauge. Values above it render as a full gauge.
pub const GAUGE_CEILING: f64 = 40.0;

/// A computed BMI, paired with its position on the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    /// weight / height², rounded to one decimal
    pub value: f64,
    /// `value / GAUGE_CEILING`, clamped to `[0, 1]`
    pub ratio: f64,
}

/// Parse a raw form field (centimeters or kilograms) into a number.
///
/// Only checks that the text is numeric; range checks happen in
/// [`compute_bmi`].
pub fn parse_measurement(raw: &str, field: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(VitalityError::invalid_input(field, raw, "a value is required"));
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| VitalityError::invalid_input(field, raw, "must be a number"))
}

/// Compute BMI from height in centimeters and weight in kilograms.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<BmiResult> {
    ensure_positive("height", height_cm)?;
    ensure_positive("weight", weight_kg)?;

    let height_m = height_cm / 100.0;
    let height_sq = height_m * height_m;
    if !height_sq.is_normal() {
        return Err(VitalityError::invalid_input(
            "height",
            height_cm,
            "too small to produce a finite BMI",
        ));
    }

    let value = round_one_decimal(weight_kg / height_sq);
    if !value.is_finite() {
        return Err(VitalityError::invalid_input(
            "weight",
            weight_kg,
            "too large to produce a finite BMI",
        ));
    }
    tracing::debug!(height_cm, weight_kg, bmi = value, "BMI computed");

    Ok(BmiResult {
        value,
        ratio: (value / GAUGE_CEILING).clamp(0.0, 1.0),
    })
}

/// Split a result into the (filled, remaining) segments of the gauge.
///
/// Both segments stay within `[0, GAUGE_CEILING]` and always sum to the
/// ceiling.
pub fn gauge_segments(result: &BmiResult) -> (f64, f64) {
    let filled = result.value.clamp(0.0, GAUGE_CEILING);
    (filled, GAUGE_CEILING - filled)
}

fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(VitalityError::invalid_input(field, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(VitalityError::invalid_input(field, value, "must be greater than zero"));
    }
    Ok(())
}
