//! OTP verification gateway
//!
//! This module normalizes email and SMS targets through one contract and
//! delegates challenge issuance and checking to an upstream provider:
//! - `traits` - the provider contract implemented by infrastructure
//! - `service` - the gateway itself
//! - `types` - provider and gateway result types

mod config;
mod service;
mod traits;
mod types;


pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::VerificationProvider;
pub use types::{ProviderError, ProviderVerification, SendCodeResult, VerifyCodeResult};
