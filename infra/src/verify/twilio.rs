//! Twilio Verify Provider Implementation
//!
//! Issues and checks one-time codes through the Twilio Verify v2 API.
//!
//! ## Behavior
//!
//! - One long-lived `reqwest::Client` per provider, shared across requests
//! - Form-encoded requests with HTTP basic auth (account SID / auth token)
//! - A single attempt per call: no retries and no client-side timeout
//! - Twilio error bodies are reduced to their `message` field
//! - Security: targets are masked and credentials never logged

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, info, warn};

use suvidha_core::domain::Channel;
use suvidha_core::services::verification::{
    ProviderError, ProviderVerification, VerificationProvider,
};
use suvidha_shared::mask_recipient;

use crate::InfrastructureError;

/// Production Twilio Verify endpoint
pub const DEFAULT_BASE_URL: &str = "https://verify.twilio.com/v2";

/// Twilio Verify configuration
#[derive(Clone)]
pub struct TwilioVerifyConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Verify Service SID
    pub service_sid: String,
    /// API base URL, without trailing slash
    pub base_url: String,
}

impl std::fmt::Debug for TwilioVerifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioVerifyConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("service_sid", &self.service_sid)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl TwilioVerifyConfig {
    /// Create configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InfrastructureError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| InfrastructureError::Config(format!("{} not set", key)))
        };

        let account_sid = required("TWILIO_ACCOUNT_SID")?;
        let auth_token = required("TWILIO_AUTH_TOKEN")?;
        let service_sid = required("TWILIO_VERIFY_SERVICE_SID")?;
        let base_url = lookup("TWILIO_VERIFY_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            account_sid,
            auth_token,
            service_sid,
            base_url,
        })
    }

    fn verifications_url(&self) -> String {
        format!("{}/Services/{}/Verifications", self.base_url, self.service_sid)
    }

    fn verification_check_url(&self) -> String {
        format!("{}/Services/{}/VerificationCheck", self.base_url, self.service_sid)
    }
}

/// Verification resource returned by both Verify endpoints
#[derive(Debug, Deserialize)]
struct VerificationResource {
    sid: Option<String>,
    status: String,
}

/// Error body returned by Twilio for non-2xx responses
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    code: Option<i64>,
    message: Option<String>,
}

/// Twilio Verify provider implementation
pub struct TwilioVerifyProvider {
    client: Client,
    config: TwilioVerifyConfig,
}

impl TwilioVerifyProvider {
    /// Create a new Twilio Verify provider
    pub fn new(config: TwilioVerifyConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder().build()?;

        info!(
            service_sid = %config.service_sid,
            base_url = %config.base_url,
            "Twilio Verify provider initialized"
        );

        Ok(Self { client, config })
    }

    async fn post_form(
        &self,
        url: String,
        form: &[(&str, &str)],
    ) -> Result<ProviderVerification, InfrastructureError> {
        let response = self
            .client
            .post(url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(InfrastructureError::Provider(error_message(response).await));
        }

        let resource = response.json::<VerificationResource>().await?;
        Ok(ProviderVerification {
            sid: resource.sid,
            status: resource.status,
        })
    }
}

/// Reduce a failed response to the message Twilio reports
async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = extract_error_message(status.as_u16(), &body);
    warn!(http_status = status.as_u16(), message = %message, "Twilio returned an error");
    message
}

pub(crate) fn extract_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<TwilioErrorBody>(body) {
        Ok(TwilioErrorBody {
            message: Some(message),
            code,
        }) => {
            debug!(twilio_code = ?code, "Parsed Twilio error body");
            message
        }
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => format!("Twilio returned HTTP {}", status),
    }
}

#[async_trait]
impl VerificationProvider for TwilioVerifyProvider {
    async fn create_verification(
        &self,
        to: &str,
        channel: Channel,
    ) -> Result<ProviderVerification, ProviderError> {
        debug!(to = %mask_recipient(to), channel = %channel, "Creating Twilio verification");

        self.post_form(
            self.config.verifications_url(),
            &[("To", to), ("Channel", channel.as_str())],
        )
        .await
        .map_err(ProviderError::from)
    }

    async fn check_verification(
        &self,
        to: &str,
        code: &str,
    ) -> Result<ProviderVerification, ProviderError> {
        debug!(to = %mask_recipient(to), "Checking Twilio verification");

        self.post_form(
            self.config.verification_check_url(),
            &[("To", to), ("Code", code)],
        )
        .await
        .map_err(ProviderError::from)
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
