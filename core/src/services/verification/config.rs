//! Configuration for the verification service

use suvidha_shared::config::verification::{VerificationConfig, DEFAULT_COUNTRY_CODE};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Prefix applied to SMS targets that do not start with '+'
    pub default_country_code: String,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            default_country_code: config.default_country_code.clone(),
        }
    }
}
