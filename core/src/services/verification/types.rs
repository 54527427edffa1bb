//! Types for verification provider calls and service results

use thiserror::Error;

use crate::domain::{Channel, VerificationStatus};

/// A verification resource as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderVerification {
    /// Provider identifier of the verification, when returned
    pub sid: Option<String>,
    /// Raw status string
    pub status: String,
}

/// Failure reported by a provider call, message kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of sending a verification code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCodeResult {
    /// Normalized target the code was sent to
    pub target: String,
    /// Channel used
    pub channel: Channel,
    /// Provider identifier of the created verification
    pub provider_reference: Option<String>,
}

/// Result of verifying a code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCodeResult {
    /// True only when the provider reported exactly "approved"
    pub approved: bool,
    /// Parsed provider status, kept for diagnostics
    pub status: VerificationStatus,
}
