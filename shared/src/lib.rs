//! Shared utilities and common types for the Jan Suvidha server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - JSON response envelopes
//! - Utility functions (phone and email handling)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, Environment, LogFormat, LoggingConfig, ServerConfig,
    VerificationConfig,
};
pub use types::{ErrorResponse, HealthResponse, MessageResponse, VerifiedResponse};
pub use utils::{email, mask_recipient, phone};
