//! Delivery collaborators for validated contact messages.

use crate::core::contact::{ContactRecord, MessageDelivery};
use crate::error::Result;

pub const DEFAULT_RECIPIENT: &str = "support@vitalitysource.example";

/// Accepts messages locally and records them in the log. Nothing leaves the
/// machine.
#[derive(Debug, Clone)]
pub struct LocalAcknowledgement {
    recipient: String,
}

impl LocalAcknowledgement {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl Default for LocalAcknowledgement {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPIENT)
    }
}

impl MessageDelivery for LocalAcknowledgement {
    fn deliver(&self, record: &ContactRecord) -> Result<()> {
        tracing::info!(
            recipient = %self.recipient,
            from = %record.email,
            message_chars = record.message.chars().count(),
            "Contact message accepted"
        );
        Ok(())
    }
}
