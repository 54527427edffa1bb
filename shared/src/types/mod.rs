//! Type definitions shared between the API and its tests
//!
//! - `response` - JSON envelopes returned by the verification endpoints

pub mod response;

pub use response::{ErrorResponse, HealthResponse, MessageResponse, VerifiedResponse};
