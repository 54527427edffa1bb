//! Verification gateway configuration

use serde::{Deserialize, Serialize};

/// Provider used when `VERIFY_PROVIDER` is not set
pub const DEFAULT_PROVIDER: &str = "twilio";

/// Country code prepended to phone numbers that lack a `+` prefix
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Verification provider selection and phone number defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Upstream provider name ("twilio" or "mock")
    pub provider: String,

    /// Default country code, always stored with a leading '+'
    pub default_country_code: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl VerificationConfig {
    /// Read `VERIFY_PROVIDER` and `DEFAULT_COUNTRY_CODE`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = lookup("VERIFY_PROVIDER")
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

        let default_country_code = lookup("DEFAULT_COUNTRY_CODE")
            .and_then(|v| normalize_country_code(&v))
            .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());

        Self {
            provider,
            default_country_code,
        }
    }
}

/// Normalize a country code to `+<digits>`; `None` when it holds no digits
pub fn normalize_country_code(raw: &str) -> Option<String> {
    let digits: String = raw.trim().trim_start_matches('+').to_string();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("+{}", digits))
}
