//! Error handling module for the registration client.
//!
//! Provides the error types for submission, rejected form events and configuration,
//! plus the user-facing messages the presenter shows.

use serde_json::Value;

use crate::models::{SubmissionStatus, TextField, ValidatedField};

/// User-facing messages as constants to avoid scattering string literals.
pub mod messages {
    pub const INVALID_EMAIL: &str = "invalid email address";
    pub const INVALID_PHONE: &str = "expected format: +7 (999) 000-00-00 or 8...";
    pub const EMPTY_HANDLE: &str = "enter a handle";
    pub const REQUIRED: &str = "required";
    pub const NO_CONNECTION: &str = "no connection to the server";
    pub const REGISTRATION_FAILED: &str = "registration failed";
    pub const SERVER_ERROR_PREFIX: &str = "server error";
}

/// Failure of a single registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// No response was received (timeout, DNS, connection refused)
    Transport(String),
    /// The endpoint answered with a non-2xx status
    Server { status: u16, message: String },
}

impl SubmitError {
    /// Build a server error from the raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        SubmitError::Server {
            status,
            message: server_error_message(status, body),
        }
    }

    /// Get the message shown to the participant.
    pub fn message(&self) -> String {
        match self {
            SubmitError::Transport(_) => messages::NO_CONNECTION.to_string(),
            SubmitError::Server { message, .. } => message.clone(),
        }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Transport(detail) => write!(f, "transport error: {}", detail),
            SubmitError::Server { status, message } => {
                write!(f, "server rejected registration ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        tracing::debug!("Registration request failed: {:?}", err);
        SubmitError::Transport(err.to_string())
    }
}

/// Extract the message to show for a non-2xx response.
///
/// Any JSON body is searched for a `message` member, falling back to a generic
/// text; bodies that are not JSON are shown as is, empty ones as a status line.
pub fn server_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => parsed
            .get("message")
            .and_then(message_text)
            .unwrap_or_else(|| messages::REGISTRATION_FAILED.to_string()),
        Err(_) if !body.trim().is_empty() => body.to_string(),
        Err(_) => format!("{} {}", messages::SERVER_ERROR_PREFIX, status),
    }
}

/// Render a `message` member; null, false, zero and blank strings carry nothing.
fn message_text(message: &Value) -> Option<String> {
    match message {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// A form event that was refused without changing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    /// A request is in flight; the form is disabled
    InFlight,
    /// The event is not available in the current status
    WrongStatus(SubmissionStatus),
    /// Consent to personal data processing is missing
    ConsentMissing,
    /// The field is disabled by the searching-for-a-team flag
    Locked(&'static str),
    /// The record did not pass validation
    Incomplete {
        invalid: Vec<ValidatedField>,
        missing: Vec<TextField>,
    },
}

impl Rejected {
    pub fn message(&self) -> String {
        match self {
            Rejected::InFlight => "a registration request is already in progress".to_string(),
            Rejected::WrongStatus(status) => {
                format!("not available while the form is {}", status.as_str())
            }
            Rejected::ConsentMissing => {
                "consent to personal data processing is required".to_string()
            }
            Rejected::Locked(field) => {
                format!("{} is disabled while looking for a team", field)
            }
            Rejected::Incomplete { invalid, missing } => {
                let mut parts = Vec::new();
                if !invalid.is_empty() {
                    let names: Vec<_> = invalid.iter().map(|f| f.text_field().as_str()).collect();
                    parts.push(format!("invalid: {}", names.join(", ")));
                }
                if !missing.is_empty() {
                    let names: Vec<_> = missing.iter().map(|f| f.as_str()).collect();
                    parts.push(format!("{}: {}", messages::REQUIRED, names.join(", ")));
                }
                parts.join("; ")
            }
        }
    }
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for Rejected {}

/// Invalid value in the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.var, self.value)
    }
}

impl std::error::Error for ConfigError {}
