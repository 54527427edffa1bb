//! Verification Provider Module
//!
//! Implementations of the upstream OTP provider contract and the factory
//! that selects one at startup.
//!
//! - **Twilio Verify**: production provider over HTTPS
//! - **Mock**: in-memory provider for development

use std::sync::Arc;

use suvidha_core::services::verification::VerificationProvider;
use suvidha_shared::config::VerificationConfig;

use crate::InfrastructureError;

pub mod mock_verify;
pub mod twilio;

pub use mock_verify::MockVerificationProvider;
pub use twilio::{TwilioVerifyConfig, TwilioVerifyProvider};

#[cfg(test)]
mod tests;

/// Create the verification provider named in the configuration
///
/// Twilio credentials are read from the process environment. The returned
/// handle is meant to be built once and shared for the life of the process.
pub fn create_verification_provider(
    config: &VerificationConfig,
) -> Result<Arc<dyn VerificationProvider>, InfrastructureError> {
    create_verification_provider_from_lookup(config, |key| std::env::var(key).ok())
}

/// Same as [`create_verification_provider`], reading credentials through `lookup`
pub fn create_verification_provider_from_lookup<F>(
    config: &VerificationConfig,
    lookup: F,
) -> Result<Arc<dyn VerificationProvider>, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    match config.provider.as_str() {
        "twilio" => {
            let twilio_config = TwilioVerifyConfig::from_lookup(lookup)?;
            Ok(Arc::new(TwilioVerifyProvider::new(twilio_config)?))
        }
        "mock" => {
            tracing::warn!("Using mock verification provider; codes are logged, not delivered");
            Ok(Arc::new(MockVerificationProvider::new()))
        }
        other => Err(InfrastructureError::Config(format!(
            "Unknown verification provider '{}' (expected 'twilio' or 'mock')",
            other
        ))),
    }
}
