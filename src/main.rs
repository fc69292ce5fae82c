//! Tupolev IT Challenge registration client
//!
//! Interactive registration form with client-side validation that submits to the
//! hackathon's registration endpoint.

mod cli;
mod config;
mod errors;
mod form;
mod models;
mod submission;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging; stdout belongs to the form
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting TIC registration client");
    tracing::info!("Request timeout: {:?}", config.request_timeout);

    if !config.require_consent {
        tracing::warn!("Consent gate disabled (TIC_REQUIRE_CONSENT). Forms submit without consent!");
    }
    if !config.inline_validation {
        tracing::warn!("Inline validation disabled (TIC_INLINE_VALIDATION)");
    }

    cli::run(&config).await
}
