//! Contact form validation and hand-off.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;

/// Minimal shape check, not RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is a valid regex")
});

pub const REQUIRED: &str = "Required";
pub const INVALID_EMAIL: &str = "Invalid email";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Replace one field, as a form does on each edit.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation failures. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<ContactField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: ContactField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Check every field of `record`; all rules run, none short-circuits.
pub fn validate(record: &ContactRecord) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if record.name.trim().is_empty() {
        errors.insert(ContactField::Name, REQUIRED);
    }
    if !EMAIL_PATTERN.is_match(&record.email) {
        errors.insert(ContactField::Email, INVALID_EMAIL);
    }
    if record.message.trim().is_empty() {
        errors.insert(ContactField::Message, REQUIRED);
    }

    errors
}

/// Receives contact messages that passed validation.
#[cfg_attr(test, mockall::automock)]
pub trait MessageDelivery {
    fn deliver(&self, record: &ContactRecord) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    Rejected(ValidationErrors),
}

/// Validate `record` and, only if it is valid, hand it to `delivery`.
pub fn submit(record: &ContactRecord, delivery: &dyn MessageDelivery) -> Result<SubmissionOutcome> {
    let errors = validate(record);
    if !errors.is_empty() {
        tracing::info!(invalid_fields = errors.len(), "Contact form rejected");
        return Ok(SubmissionOutcome::Rejected(errors));
    }

    delivery.deliver(record)?;
    tracing::info!("Contact form delivered");
    Ok(SubmissionOutcome::Delivered)
}
