//! Mock Verification Provider
//!
//! In-memory stand-in for a hosted verification service, used in local
//! development. Codes are written to the log instead of being delivered.

use async_trait::async_trait;
use rand::Rng;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

use suvidha_core::domain::Channel;
use suvidha_core::services::verification::{
    ProviderError, ProviderVerification, VerificationProvider,
};
use suvidha_shared::mask_recipient;

/// Message returned when checking a target with no outstanding code
pub const NOT_FOUND_MESSAGE: &str = "The requested resource was not found";

/// Mock provider: one outstanding code per target, consumed on approval
pub struct MockVerificationProvider {
    codes: RwLock<HashMap<String, String>>,
    fixed_code: Option<String>,
}

impl MockVerificationProvider {
    /// Create a provider that issues random 6-digit codes
    pub fn new() -> Self {
        Self {
            codes: RwLock::new(HashMap::new()),
            fixed_code: None,
        }
    }

    /// Create a provider that always issues `code`
    pub fn with_fixed_code(code: impl Into<String>) -> Self {
        Self {
            codes: RwLock::new(HashMap::new()),
            fixed_code: Some(code.into()),
        }
    }

    /// Code currently outstanding for `to`
    pub async fn outstanding_code(&self, to: &str) -> Option<String> {
        self.codes.read().await.get(to).cloned()
    }

    fn next_code(&self) -> String {
        match &self.fixed_code {
            Some(code) => code.clone(),
            None => format!("{:06}", rand::thread_rng().gen_range(0..1_000_000)),
        }
    }
}

impl Default for MockVerificationProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationProvider for MockVerificationProvider {
    async fn create_verification(
        &self,
        to: &str,
        channel: Channel,
    ) -> Result<ProviderVerification, ProviderError> {
        let code = self.next_code();

        // Plain code on purpose: this provider only exists for local runs.
        info!(
            target_masked = %mask_recipient(to),
            channel = %channel,
            code = %code,
            "[MOCK VERIFY] Issued verification code"
        );

        self.codes.write().await.insert(to.to_string(), code);

        Ok(ProviderVerification {
            sid: Some(format!("VE-mock-{}", rand::thread_rng().gen::<u32>())),
            status: "pending".to_string(),
        })
    }

    async fn check_verification(
        &self,
        to: &str,
        code: &str,
    ) -> Result<ProviderVerification, ProviderError> {
        let mut codes = self.codes.write().await;

        let status = match codes.get(to).map(|expected| expected == code) {
            None => return Err(ProviderError::new(NOT_FOUND_MESSAGE)),
            Some(true) => {
                codes.remove(to);
                "approved"
            }
            Some(false) => "pending",
        };

        Ok(ProviderVerification {
            sid: None,
            status: status.to_string(),
        })
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
