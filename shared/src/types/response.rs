//! API response envelopes
//!
//! Every verification endpoint answers with a flat JSON object carrying a
//! `success` flag. Failures always include a human-readable `message`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{ success, message }` envelope returned by the send endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Successful response with a message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// `{ success, verified }` envelope returned by the verify endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedResponse {
    pub success: bool,
    pub verified: bool,
}

impl VerifiedResponse {
    /// Both flags mirror the approval outcome
    pub fn from_approval(approved: bool) -> Self {
        Self {
            success: approved,
            verified: approved,
        }
    }
}

/// `{ success: false, message }` envelope for every failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: String,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}
