pub mod verification_request;

pub use verification_request::{Channel, VerificationRequest};
