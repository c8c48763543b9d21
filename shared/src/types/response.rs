//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::FieldError;

/// Textual status carried by verification bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// 200 body for an accepted code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl VerifyResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }
}

/// Lenient view over any body the verify endpoint can return.
///
/// `status` is either the textual [`ResponseStatus`] or the numeric HTTP
/// status (rate-limit bodies), so it is kept as raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub status: Option<serde_json::Value>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
}

impl ResponseEnvelope {
    /// Whether the body reports `"status": "success"`
    pub fn is_success(&self) -> bool {
        matches!(&self.status, Some(serde_json::Value::String(status)) if status == "success")
    }

    /// Non-blank message, if any
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }

    pub fn has_field_errors(&self) -> bool {
        self.errors.is_some()
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}
