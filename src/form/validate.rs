//! Format rules checked on submit.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::HANDLE_PREFIX;
use crate::errors::messages;
use crate::models::{FieldErrors, RegistrationRecord, TextField, ValidatedField};

/// local@domain.tld, no whitespace and a single `@`.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Russian number: `8` or `+7`, then 3+3+2+2 digits with optional separators.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:8|\+7)[\s-]?\(?\d{3}\)?[\s-]?\d{3}[\s-]?\d{2}[\s-]?\d{2}$")
        .expect("Invalid phone regex")
});

/// Result of a validation sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: FieldErrors,
    pub is_valid: bool,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// A handle is empty when nothing but the prefix was entered.
pub fn is_empty_handle(handle: &str) -> bool {
    let trimmed = handle.trim();
    trimmed.is_empty() || trimmed.chars().eq(std::iter::once(HANDLE_PREFIX))
}

/// Check every format rule; all failures are reported together.
pub fn validate(record: &RegistrationRecord) -> Validation {
    let mut errors = FieldErrors::default();

    if !is_valid_email(&record.email) {
        errors.set(ValidatedField::Email, messages::INVALID_EMAIL);
    }

    if !is_valid_phone(&record.phone_number) {
        errors.set(ValidatedField::PhoneNumber, messages::INVALID_PHONE);
    }

    if is_empty_handle(&record.telegram_name) {
        errors.set(ValidatedField::TelegramName, messages::EMPTY_HANDLE);
    }

    let is_valid = errors.is_empty();
    Validation { errors, is_valid }
}

/// Whether the field must be filled in for the given record.
pub fn is_required(record: &RegistrationRecord, field: TextField) -> bool {
    match field {
        TextField::Patronymic => false,
        TextField::TeamName => !record.searching_command,
        _ => true,
    }
}

/// Required fields left empty, in form order.
pub fn missing_required(record: &RegistrationRecord) -> Vec<TextField> {
    TextField::ALL
        .into_iter()
        .filter(|field| is_required(record, *field))
        .filter(|field| {
            let value = record.text(*field);
            match field {
                TextField::TelegramName => is_empty_handle(value),
                _ => value.trim().is_empty(),
            }
        })
        .collect()
}
