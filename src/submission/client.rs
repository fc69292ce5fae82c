//! Transport to the registration endpoint.

use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::errors::SubmitError;
use crate::models::RegistrationRecord;

/// Sends a registration record and reports whether the endpoint accepted it.
pub trait RegistrationClient {
    fn register(
        &self,
        record: &RegistrationRecord,
    ) -> impl Future<Output = Result<(), SubmitError>>;
}

/// JSON-over-HTTP client for the registration endpoint.
#[derive(Debug, Clone)]
pub struct HttpRegistrationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpRegistrationClient {
    /// Build a client whose requests give up after `timeout`.
    ///
    /// A timed-out request resolves as a transport error, so the submission
    /// gate is always released.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(config.register_url.clone(), config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RegistrationClient for HttpRegistrationClient {
    async fn register(&self, record: &RegistrationRecord) -> Result<(), SubmitError> {
        let response = self.http.post(&self.endpoint).json(record).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // An unreadable body is treated like an empty one.
        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::from_response(status.as_u16(), &body))
    }
}
