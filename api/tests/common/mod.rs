//! Shared fixtures for the route tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use suvidha_api::routes::AppState;
use suvidha_core::domain::Channel;
use suvidha_core::services::{
    ProviderError, ProviderVerification, VerificationProvider, VerificationService,
    VerificationServiceConfig,
};

/// Upstream call observed by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create { to: String, channel: Channel },
    Check { to: String, code: String },
}

/// Provider stand-in that records calls and answers with a fixed outcome
pub struct FakeProvider {
    calls: Mutex<Vec<Call>>,
    check_status: String,
    failure: Option<String>,
}

impl FakeProvider {
    pub fn approving() -> Arc<Self> {
        Self::with_status("approved")
    }

    pub fn with_status(status: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            check_status: status.to_string(),
            failure: None,
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            check_status: String::new(),
            failure: Some(message.to_string()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerificationProvider for FakeProvider {
    async fn create_verification(
        &self,
        to: &str,
        channel: Channel,
    ) -> Result<ProviderVerification, ProviderError> {
        self.calls.lock().unwrap().push(Call::Create {
            to: to.to_string(),
            channel,
        });
        match &self.failure {
            Some(message) => Err(ProviderError::new(message.clone())),
            None => Ok(ProviderVerification {
                sid: Some("VEfake".to_string()),
                status: "pending".to_string(),
            }),
        }
    }

    async fn check_verification(
        &self,
        to: &str,
        code: &str,
    ) -> Result<ProviderVerification, ProviderError> {
        self.calls.lock().unwrap().push(Call::Check {
            to: to.to_string(),
            code: code.to_string(),
        });
        match &self.failure {
            Some(message) => Err(ProviderError::new(message.clone())),
            None => Ok(ProviderVerification {
                sid: Some("VEfake".to_string()),
                status: self.check_status.clone(),
            }),
        }
    }

    fn provider_name(&self) -> &str {
        "Fake"
    }
}

pub fn app_state(provider: Arc<FakeProvider>) -> web::Data<AppState<FakeProvider>> {
    let service = VerificationService::new(provider, VerificationServiceConfig::default());
    web::Data::new(AppState::new(Arc::new(service)))
}

pub const MAX_PAYLOAD_SIZE: usize = 256 * 1024;

/// Initialize the full application around `provider`
macro_rules! init_app {
    ($provider:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(suvidha_api::app::configure(
                    common::app_state($provider.clone()),
                    common::MAX_PAYLOAD_SIZE,
                ))
                .default_service(actix_web::web::route().to(suvidha_api::handlers::not_found)),
        )
        .await
    };
}
