//! Main verification service implementation

use std::sync::Arc;

use suvidha_shared::{
    email::{looks_like_email, mask_email},
    phone::{is_valid_international_phone, mask_phone_number},
};

use crate::domain::{Channel, VerificationRequest, VerificationStatus};
use crate::errors::{DomainError, DomainResult};

use super::config::VerificationServiceConfig;
use super::traits::VerificationProvider;
use super::types::{SendCodeResult, VerifyCodeResult};

/// Gateway in front of an upstream verification provider
///
/// Every call is a single stateless round trip. No retries, timeouts,
/// caching or local coordination happen here; the provider owns throttling,
/// expiry and consumption of codes.
pub struct VerificationService<P: VerificationProvider + ?Sized> {
    /// Upstream provider, constructed once at startup
    provider: Arc<P>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<P: VerificationProvider + ?Sized> VerificationService<P> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `provider` - Upstream provider implementation
    /// * `config` - Service configuration
    pub fn new(provider: Arc<P>, config: VerificationServiceConfig) -> Self {
        Self { provider, config }
    }

    /// Trim and normalize a target without contacting the provider
    pub fn normalize_target(&self, target: &str, channel: Channel) -> DomainResult<String> {
        VerificationRequest::new(target, channel, &self.config.default_country_code)
            .map(|request| request.target().to_string())
    }

    /// Request a one-time code for `target` over `channel`
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - The provider accepted the request
    /// * `Err(DomainError::Validation)` - The target was empty; the provider was not called
    /// * `Err(DomainError::Upstream)` - The provider call failed
    pub async fn send_verification_code(
        &self,
        target: &str,
        channel: Channel,
    ) -> DomainResult<SendCodeResult> {
        let request = VerificationRequest::new(target, channel, &self.config.default_country_code)?;
        let masked = mask_target(request.target(), channel);
        note_unusual_target(&request, &masked);

        let created = self
            .provider
            .create_verification(request.target(), channel)
            .await
            .map_err(|e| {
                tracing::error!(
                    target_masked = %masked,
                    channel = %channel,
                    provider = self.provider.provider_name(),
                    error = %e,
                    event = "otp_send_failed",
                    "Provider rejected verification request"
                );
                DomainError::Upstream { message: e.message }
            })?;

        tracing::info!(
            target_masked = %masked,
            channel = %channel,
            provider = self.provider.provider_name(),
            status = %created.status,
            event = "otp_sent",
            "Verification code requested"
        );

        Ok(SendCodeResult {
            target: request.target().to_string(),
            channel,
            provider_reference: created.sid,
        })
    }

    /// Check `code` against the outstanding challenge for `target`
    ///
    /// Any status other than exactly "approved" yields `approved = false`
    /// rather than an error.
    pub async fn verify_code(
        &self,
        target: &str,
        channel: Channel,
        code: &str,
    ) -> DomainResult<VerifyCodeResult> {
        let request = VerificationRequest::new(target, channel, &self.config.default_country_code)?;
        let masked = mask_target(request.target(), channel);

        let checked = self
            .provider
            .check_verification(request.target(), code)
            .await
            .map_err(|e| {
                tracing::error!(
                    target_masked = %masked,
                    channel = %channel,
                    provider = self.provider.provider_name(),
                    error = %e,
                    event = "otp_check_failed",
                    "Provider rejected verification check"
                );
                DomainError::Upstream { message: e.message }
            })?;

        let status = VerificationStatus::from(checked.status.as_str());
        let approved = status.is_approved();

        if approved {
            tracing::info!(
                target_masked = %masked,
                channel = %channel,
                event = "otp_verified",
                "Verification code approved"
            );
        } else {
            tracing::warn!(
                target_masked = %masked,
                channel = %channel,
                status = %status,
                event = "otp_not_approved",
                "Verification code not approved"
            );
        }

        Ok(VerifyCodeResult { approved, status })
    }
}

/// Mask a normalized target for logging
pub(crate) fn mask_target(target: &str, channel: Channel) -> String {
    match channel {
        Channel::Email => mask_email(target),
        Channel::Sms => mask_phone_number(target),
    }
}

// The provider decides validity; odd-looking targets are forwarded as-is.
fn note_unusual_target(request: &VerificationRequest, masked: &str) {
    let looks_valid = match request.channel() {
        Channel::Email => looks_like_email(request.target()),
        Channel::Sms => is_valid_international_phone(request.target()),
    };
    if !looks_valid {
        tracing::debug!(
            target_masked = %masked,
            channel = %request.channel(),
            "Target does not look well-formed, forwarding to provider anyway"
        );
    }
}
