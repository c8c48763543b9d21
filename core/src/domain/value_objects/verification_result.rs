//! Outcome of one verification attempt as seen by a caller

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Message shown when a failure carries none of its own
pub const GENERIC_FAILURE_MESSAGE: &str = "Invalid verification code. Please try again.";

/// Category of a failed verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The code was malformed
    Validation,
    /// The code was well formed but rejected
    Domain,
    /// Too many attempts from this client
    RateLimited,
    /// The verification service could not be reached
    Network,
    /// The verification service failed or answered unexpectedly
    Server,
}

/// Result of submitting a code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VerificationResult {
    Success {
        message: String,
    },
    Failure {
        kind: FailureKind,
        message: Option<String>,
    },
}

impl VerificationResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn failure(kind: FailureKind, message: Option<String>) -> Self {
        Self::Failure { kind, message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Message to show the user; failures without one fall back to
    /// [`GENERIC_FAILURE_MESSAGE`]
    pub fn display_message(&self) -> &str {
        match self {
            Self::Success { message } => message,
            Self::Failure { message, .. } => message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(GENERIC_FAILURE_MESSAGE),
        }
    }
}

impl From<&DomainError> for VerificationResult {
    fn from(error: &DomainError) -> Self {
        Self::failure(error.kind(), Some(error.public_message()))
    }
}

impl From<DomainError> for VerificationResult {
    fn from(error: DomainError) -> Self {
        Self::from(&error)
    }
}
