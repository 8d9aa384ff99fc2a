//! In-memory implementations of the crate's collaborator traits

use std::cell::{Cell, RefCell};

use crate::core::contact::{ContactRecord, MessageDelivery};
use crate::error::{Result, VitalityError};
use crate::theme::PreferenceStore;

/// Delivery that keeps every record it receives, or fails on demand.
#[derive(Debug, Default)]
pub struct RecordingDelivery {
    delivered: RefCell<Vec<ContactRecord>>,
    fail_with: Option<String>,
}

impl RecordingDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            delivered: RefCell::default(),
            fail_with: Some(message.into()),
        }
    }

    pub fn delivered(&self) -> Vec<ContactRecord> {
        self.delivered.borrow().clone()
    }
}

impl MessageDelivery for RecordingDelivery {
    fn deliver(&self, record: &ContactRecord) -> Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(VitalityError::delivery("recording", message.clone()));
        }
        self.delivered.borrow_mut().push(record.clone());
        Ok(())
    }
}

/// Preference store backed by a `Cell`, counting saves.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Cell<Option<bool>>,
    saves: Cell<usize>,
}

impl MemoryPreferenceStore {
    pub fn with_value(dark_mode: bool) -> Self {
        Self {
            value: Cell::new(Some(dark_mode)),
            saves: Cell::new(0),
        }
    }

    pub fn value(&self) -> Option<bool> {
        self.value.get()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<bool>> {
        Ok(self.value.get())
    }

    fn save(&self, dark_mode: bool) -> Result<()> {
        self.value.set(Some(dark_mode));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
