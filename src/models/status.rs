//! Presentation state exposed by the submission controller.

use serde::{Deserialize, Serialize};

use super::registration::{RegistrationRecord, ValidatedField};

/// Inline error messages from the last validation pass.
///
/// `None` means the field has no error to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_name: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: ValidatedField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: ValidatedField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: ValidatedField) {
        *self.slot_mut(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Fields that currently carry an error.
    pub fn fields(&self) -> Vec<ValidatedField> {
        [
            ValidatedField::Email,
            ValidatedField::PhoneNumber,
            ValidatedField::TelegramName,
        ]
        .into_iter()
        .filter(|field| self.slot(*field).is_some())
        .collect()
    }

    fn slot(&self, field: ValidatedField) -> &Option<String> {
        match field {
            ValidatedField::Email => &self.email,
            ValidatedField::PhoneNumber => &self.phone_number,
            ValidatedField::TelegramName => &self.telegram_name,
        }
    }

    fn slot_mut(&mut self, field: ValidatedField) -> &mut Option<String> {
        match field {
            ValidatedField::Email => &mut self.email,
            ValidatedField::PhoneNumber => &mut self.phone_number,
            ValidatedField::TelegramName => &mut self.telegram_name,
        }
    }
}

/// Outcome state of the form. The in-flight request is tracked separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }
}

/// Read-only view of the form handed to the presenter on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub record: RegistrationRecord,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub in_flight: bool,
    pub consent: bool,
    pub team_lead_locked: bool,
    pub team_name_locked: bool,
    pub submit_enabled: bool,
}
