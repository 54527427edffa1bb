//! # Infrastructure Layer
//!
//! Concrete implementations of the upstream verification provider contract
//! defined in `suvidha_core`:
//! - **Twilio Verify**: hosted OTP issuance and checking over HTTPS
//! - **Mock**: in-memory provider for local development

/// Verification provider module - upstream OTP services
pub mod verify;

pub use verify::{
    create_verification_provider, create_verification_provider_from_lookup,
    MockVerificationProvider, TwilioVerifyConfig, TwilioVerifyProvider,
};

use suvidha_core::services::verification::ProviderError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reported by the provider itself
    #[error("Provider error: {0}")]
    Provider(String),
}

impl From<InfrastructureError> for ProviderError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Http(e) => ProviderError::new(e.to_string()),
            InfrastructureError::Config(message) | InfrastructureError::Provider(message) => {
                ProviderError::new(message)
            }
        }
    }
}
