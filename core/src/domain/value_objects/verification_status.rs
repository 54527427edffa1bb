//! Status reported by the upstream provider for a verification.

use serde::{Deserialize, Serialize};

/// Provider-reported verification status
///
/// Only the exact string `"approved"` maps to [`VerificationStatus::Approved`];
/// values the provider invents are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStatus {
    Pending,
    Approved,
    Canceled,
    Expired,
    Other(String),
}

impl VerificationStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, VerificationStatus::Approved)
    }

    pub fn as_str(&self) -> &str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Canceled => "canceled",
            VerificationStatus::Expired => "expired",
            VerificationStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for VerificationStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "pending" => VerificationStatus::Pending,
            "approved" => VerificationStatus::Approved,
            "canceled" => VerificationStatus::Canceled,
            "expired" => VerificationStatus::Expired,
            other => VerificationStatus::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
