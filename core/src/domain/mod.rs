//! Domain types for OTP verification.

pub mod entities;
pub mod value_objects;

pub use entities::{Channel, VerificationRequest};
pub use value_objects::VerificationStatus;
