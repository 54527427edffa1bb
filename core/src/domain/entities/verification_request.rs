//! Verification request entity: a normalized target on a delivery channel.

use serde::{Deserialize, Serialize};
use suvidha_shared::phone::with_default_country_code;

use crate::errors::{DomainError, DomainResult};

/// Delivery channel for a one-time code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Sms,
}

impl Channel {
    /// Channel name as understood by the upstream provider
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
        }
    }

    /// Human name of the target kind, used in validation messages
    pub fn target_label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Sms => "Phone",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A target that has passed local validation and normalization
///
/// Construction guarantees the target is non-empty after trimming, and that
/// SMS targets carry a leading '+'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    target: String,
    channel: Channel,
}

impl VerificationRequest {
    /// Trim and normalize a raw target
    ///
    /// # Arguments
    ///
    /// * `raw_target` - Email address or phone number as supplied by the caller
    /// * `channel` - Delivery channel
    /// * `default_country_code` - Prefix applied to SMS targets lacking '+'
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` ("Email required" / "Phone required") when the
    /// target is empty after trimming.
    pub fn new(raw_target: &str, channel: Channel, default_country_code: &str) -> DomainResult<Self> {
        let trimmed = raw_target.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation {
                message: format!("{} required", channel.target_label()),
            });
        }

        let target = match channel {
            Channel::Email => trimmed.to_string(),
            Channel::Sms => with_default_country_code(trimmed, default_country_code),
        };

        Ok(Self { target, channel })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_target_is_trimmed_only() {
        let request = VerificationRequest::new("  user@example.com \n", Channel::Email, "+91").unwrap();
        assert_eq!(request.target(), "user@example.com");
        assert_eq!(request.channel(), Channel::Email);
    }

    #[test]
    fn test_email_target_never_gets_country_code() {
        let request = VerificationRequest::new("9876543210", Channel::Email, "+91").unwrap();
        assert_eq!(request.target(), "9876543210");
    }

    #[test]
    fn test_phone_target_gets_default_country_code() {
        let request = VerificationRequest::new(" 9876543210 ", Channel::Sms, "+91").unwrap();
        assert_eq!(request.target(), "+919876543210");
    }

    #[test]
    fn test_prefixed_phone_passes_through() {
        let request = VerificationRequest::new("+14155551234", Channel::Sms, "+91").unwrap();
        assert_eq!(request.target(), "+14155551234");
    }

    #[test]
    fn test_blank_targets_are_rejected() {
        match VerificationRequest::new("   ", Channel::Email, "+91") {
            Err(DomainError::Validation { message }) => assert_eq!(message, "Email required"),
            other => panic!("Expected validation error, got {:?}", other),
        }
        match VerificationRequest::new("", Channel::Sms, "+91") {
            Err(DomainError::Validation { message }) => assert_eq!(message, "Phone required"),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_channel_wire_names() {
        assert_eq!(Channel::Email.as_str(), "email");
        assert_eq!(Channel::Sms.to_string(), "sms");
    }
}
