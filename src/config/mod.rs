//! Configuration module for the registration client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::form::FormOptions;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Registration endpoint the form posts to
    pub register_url: String,
    /// Upper bound on a single registration request
    pub request_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Show format errors inline and block submission on them
    pub inline_validation: bool,
    /// Require the personal data consent checkbox before submitting
    pub require_consent: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let register_url = env::var("TIC_REGISTER_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api/auth/register".to_string());

        let request_timeout = match env::var("TIC_REQUEST_TIMEOUT_SECS") {
            Ok(value) => match value.trim().parse::<u64>().ok() {
                Some(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError {
                        var: "TIC_REQUEST_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            Err(_) => Duration::from_secs(15),
        };

        let log_level = env::var("TIC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = match env::var("TIC_LOG_FORMAT") {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "text" => false,
                "json" => true,
                _ => {
                    return Err(ConfigError {
                        var: "TIC_LOG_FORMAT",
                        value,
                    })
                }
            },
            Err(_) => false,
        };

        let inline_validation = bool_var("TIC_INLINE_VALIDATION", true)?;
        let require_consent = bool_var("TIC_REQUIRE_CONSENT", true)?;

        Ok(Self {
            register_url,
            request_timeout,
            log_level,
            log_json,
            inline_validation,
            require_consent,
        })
    }

    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            inline_validation: self.inline_validation,
            require_consent: self.require_consent,
        }
    }
}

fn bool_var(var: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(var) {
        Ok(value) => parse_bool(&value).ok_or(ConfigError { var, value }),
        Err(_) => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
