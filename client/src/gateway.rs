//! Submission of assembled codes to the verify endpoint

use async_trait::async_trait;
use ov_core::domain::value_objects::{FailureKind, VerificationResult};
use ov_shared::types::ResponseEnvelope;

use crate::config::ClientConfig;
use crate::error::GatewayError;

const DEFAULT_SUCCESS_MESSAGE: &str = "Verification Successful";

/// Anything that can verify an assembled code.
///
/// Implementations resolve every outcome, transport failures included, to a
/// [`VerificationResult`].
#[async_trait]
pub trait VerificationGateway: Send + Sync {
    async fn verify(&self, code: &str) -> VerificationResult;
}

/// Gateway posting `{"code": ...}` to the HTTP API
#[derive(Debug, Clone)]
pub struct HttpVerificationGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpVerificationGateway {
    pub fn new(config: &ClientConfig) -> Result<Self, GatewayError> {
        if config.api_url.trim().is_empty() {
            return Err(GatewayError::Config("API URL is empty".to_string()));
        }
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.verify_url(),
        })
    }

    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl VerificationGateway for HttpVerificationGateway {
    async fn verify(&self, code: &str) -> VerificationResult {
        let response = match self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "code": code }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    timeout = e.is_timeout(),
                    error = %e,
                    "Verification request failed"
                );
                return VerificationResult::failure(FailureKind::Network, None);
            }
        };

        let status = response.status().as_u16();
        let envelope = match response.json::<ResponseEnvelope>().await {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                tracing::debug!(status, error = %e, "Verification response body not decodable");
                None
            }
        };

        let result = classify(status, envelope);
        tracing::debug!(status, kind = ?result.failure_kind(), "Verification response classified");
        result
    }
}

/// Map an HTTP status and decoded body to a result.
///
/// 2xx without `"status": "success"` is treated as a server failure.
pub fn classify(status: u16, envelope: Option<ResponseEnvelope>) -> VerificationResult {
    let envelope = envelope.unwrap_or_default();
    let message = envelope.message().map(String::from);

    match status {
        200..=299 if envelope.is_success() => VerificationResult::success(
            message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
        ),
        200..=299 => VerificationResult::failure(FailureKind::Server, message),
        400 if envelope.has_field_errors() => {
            VerificationResult::failure(FailureKind::Validation, message)
        }
        400 => VerificationResult::failure(FailureKind::Domain, message),
        429 => VerificationResult::failure(FailureKind::RateLimited, message),
        _ => VerificationResult::failure(FailureKind::Server, message),
    }
}
