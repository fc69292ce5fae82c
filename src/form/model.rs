//! Form model: the record being edited and its inline errors.

use super::normalize::normalize;
use crate::models::{FieldErrors, Flag, RegistrationRecord, TextField, ValidatedField};

/// The captain checkbox is disabled while looking for a team.
pub fn team_lead_locked(record: &RegistrationRecord) -> bool {
    record.searching_command
}

/// The team name input is disabled while looking for a team.
pub fn team_name_locked(record: &RegistrationRecord) -> bool {
    record.searching_command
}

#[derive(Debug, Clone, Default)]
pub struct FormModel {
    record: RegistrationRecord,
    errors: FieldErrors,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Replace the inline errors with the result of a validation pass.
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Store a normalized value and drop that field's stale error.
    ///
    /// Returns `false` without touching anything when the field is locked.
    pub fn set_field(&mut self, field: TextField, raw: &str) -> bool {
        if field == TextField::TeamName && team_name_locked(&self.record) {
            return false;
        }

        *self.record.text_mut(field) = normalize(field, raw);

        if let Some(validated) = ValidatedField::from_text_field(field) {
            self.errors.clear(validated);
        }

        true
    }

    /// Set a checkbox.
    ///
    /// Returns `false` without touching anything when the flag is locked.
    pub fn set_flag(&mut self, flag: Flag, value: bool) -> bool {
        match flag {
            Flag::SearchingCommand => {
                self.record.searching_command = value;
                if value {
                    self.record.team_lead = false;
                }
                true
            }
            Flag::TeamLead => {
                if team_lead_locked(&self.record) {
                    return false;
                }
                self.record.team_lead = value;
                true
            }
        }
    }
}
