//! # Jan Suvidha Core
//!
//! Domain layer for the OTP verification gateway. This crate contains the
//! channel and status types, the upstream provider contract, the gateway
//! service, and the error type the HTTP layer maps to responses.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
