//! Shared error types and response structures
//!
//! These are the bodies the HTTP API writes for every failure path. The code
//! entry client decodes the same shapes through [`crate::types::ResponseEnvelope`].

use serde::{Deserialize, Serialize};

use crate::types::ResponseStatus;

/// One failed constraint on a request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Request field the constraint applies to
    pub field: String,

    /// Machine-readable constraint identifier (see [`error_codes`])
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Submitted value, when one was present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// 400 body for malformed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub status: ResponseStatus,

    /// Message of the first failed constraint
    pub message: String,

    pub errors: Vec<FieldError>,
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<FieldError>) -> Self {
        let message = errors
            .first()
            .map(|error| error.message.clone())
            .unwrap_or_else(|| String::from("Invalid request data"));
        Self {
            status: ResponseStatus::Error,
            message,
            errors,
        }
    }
}

/// Body for domain failures and server errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusErrorResponse {
    pub status: ResponseStatus,

    pub message: String,

    /// Diagnostic detail (development only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StatusErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// 429 body; `status` carries the numeric HTTP status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResponse {
    pub status: u16,
    pub message: String,
}

impl RateLimitResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: 429,
            message: message.into(),
        }
    }
}

/// 404 body for unmatched routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub message: String,
}

impl NotFoundResponse {
    pub fn for_path(path: &str) -> Self {
        Self {
            message: format!("{} not found", path),
        }
    }
}

/// Constraint identifiers used in [`FieldError::code`]
pub mod error_codes {
    pub const LENGTH: &str = "length";
    pub const NUMERIC: &str = "numeric";
    pub const MALFORMED_BODY: &str = "body";
}
