//! Domain error type for the verification gateway.

use thiserror::Error;

/// Gateway errors
///
/// Exactly two kinds exist: local validation failures, raised before any
/// network call, and upstream failures carrying the provider's message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Upstream { message: String },
}

impl DomainError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, DomainError::Upstream { .. })
    }

    /// The human-readable message, verbatim
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation { message } | DomainError::Upstream { message } => message,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_raw_message() {
        let error = DomainError::Upstream {
            message: "Invalid parameter `To`: +91".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid parameter `To`: +91");
        assert_eq!(error.message(), "Invalid parameter `To`: +91");
        assert!(error.is_upstream());
        assert!(!error.is_validation());
    }
}
