//! Trait for upstream verification provider integration

use async_trait::async_trait;

use crate::domain::Channel;

use super::types::{ProviderError, ProviderVerification};

/// Upstream service that issues and checks one-time codes
///
/// Implementations hold their own long-lived client and must be safe for
/// concurrent use. Challenge state lives entirely on the provider side.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Ask the provider to issue a code to `to` over `channel`
    async fn create_verification(
        &self,
        to: &str,
        channel: Channel,
    ) -> Result<ProviderVerification, ProviderError>;

    /// Ask the provider to check `code` against the outstanding challenge for `to`
    async fn check_verification(
        &self,
        to: &str,
        code: &str,
    ) -> Result<ProviderVerification, ProviderError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
