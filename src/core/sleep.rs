//! Sleep-duration calculation between two times of day.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::round_one_decimal;
use crate::error::{Result, VitalityError};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wall-clock time with minute precision and no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build a time from an hour in `0..=23` and a minute in `0..=59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| {
                if hour > 23 {
                    VitalityError::invalid_input("hour", hour, "must be between 0 and 23")
                } else {
                    VitalityError::invalid_input("minute", minute, "must be between 0 and 59")
                }
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hour()) * 60 + i64::from(self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = VitalityError;

    /// Accepts `HH:MM`, the format an HTML time input submits.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| {
            VitalityError::invalid_input("time", s, "expected HH:MM (24-hour clock)")
        })?;
        Self::new(parsed.hour(), parsed.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Time asleep between a bed time and a wake time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SleepResult {
    /// Elapsed hours, rounded to one decimal
    pub hours: f64,
}

/// Hours slept going to bed at `bed` and waking at `wake`.
///
/// A wake time earlier than the bed time is taken to be on the next day.
/// Equal times mean no sleep at all, not a full day.
pub fn compute_sleep_hours(bed: TimeOfDay, wake: TimeOfDay) -> SleepResult {
    let mut diff = wake.minutes_since_midnight() - bed.minutes_since_midnight();
    if diff < 0 {
        diff += MINUTES_PER_DAY;
    }

    let hours = round_one_decimal(diff as f64 / 60.0);
    tracing::debug!(bed = %bed, wake = %wake, hours, "Sleep duration computed");

    SleepResult { hours }
}

/// Integer form of [`compute_sleep_hours`]; fails only on out-of-range times.
pub fn compute_sleep_hours_hm(
    bed_hour: u32,
    bed_minute: u32,
    wake_hour: u32,
    wake_minute: u32,
) -> Result<SleepResult> {
    let bed = TimeOfDay::new(bed_hour, bed_minute)?;
    let wake = TimeOfDay::new(wake_hour, wake_minute)?;
    Ok(compute_sleep_hours(bed, wake))
}
