//! Domain-specific error types and error handling.

mod types;

pub use types::ValidationError;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::value_objects::FailureKind;

/// Public message for a well-formed code that fails the domain rule
pub const VERIFICATION_FAILED_MESSAGE: &str = "Verification Error";

/// Public message for unexpected failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Verification Error")]
    VerificationFailed,

    #[error("Too many verification requests, please try again after {retry_after}")]
    RateLimited {
        /// Requests allowed per window
        limit: u32,
        /// When the current window ends
        reset_at: DateTime<Utc>,
        /// `reset_at` rendered for display, e.g. "03:15 PM"
        retry_after: String,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Expected failures caused by the request rather than the service
    pub fn is_operational(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::VerificationFailed => FailureKind::Domain,
            Self::RateLimited { .. } => FailureKind::RateLimited,
            Self::Internal { .. } => FailureKind::Server,
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::VerificationFailed => 400,
            Self::RateLimited { .. } => 429,
            Self::Internal { .. } => 500,
        }
    }

    /// Message safe to return to callers; internal details are withheld
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VerificationCode;
    use chrono::TimeZone;

    #[test]
    fn test_validation_error_displays_first_violation() {
        let error: DomainError = VerificationCode::parse("").unwrap_err().into();
        assert_eq!(error.to_string(), "Code must be exactly 6 digits");
        assert_eq!(error.kind(), FailureKind::Validation);
        assert_eq!(error.http_status(), 400);
        assert!(error.is_operational());
    }

    #[test]
    fn test_empty_validation_error_falls_back() {
        assert_eq!(ValidationError::new(vec![]).to_string(), "Invalid request data");
    }

    #[test]
    fn test_rate_limited_message() {
        let error = DomainError::RateLimited {
            limit: 10,
            reset_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
            retry_after: "03:15 PM".into(),
        };
        assert_eq!(
            error.to_string(),
            "Too many verification requests, please try again after 03:15 PM"
        );
        assert_eq!(error.http_status(), 429);
    }

    #[test]
    fn test_internal_message_is_withheld() {
        let error = DomainError::internal("redis connection refused");
        assert!(!error.is_operational());
        assert_eq!(error.http_status(), 500);
        assert_eq!(error.public_message(), INTERNAL_ERROR_MESSAGE);
        assert!(error.to_string().contains("redis connection refused"));
    }
}
