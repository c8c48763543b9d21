//! Main verification service implementation

use ov_shared::config::VerificationConfig;

use crate::domain::entities::VerificationCode;
use crate::errors::{DomainError, DomainResult};

use super::types::VerifyCodeResult;

/// Message returned for an accepted code
pub const VERIFICATION_SUCCESS_MESSAGE: &str = "Verification Successful";

/// Verification service for one-time codes
#[derive(Debug, Clone, Default)]
pub struct VerificationService {
    config: VerificationConfig,
}

impl VerificationService {
    /// Create the service; a rule that could never match falls back to the
    /// default rule
    pub fn new(config: VerificationConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(reason) => {
                tracing::warn!(
                    reason = %reason,
                    "Invalid verification rule configuration, using defaults"
                );
                VerificationConfig::default()
            }
        };
        Self { config }
    }

    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    /// Validate the shape of `raw` and apply the domain rule
    pub fn verify(&self, raw: &str) -> DomainResult<VerifyCodeResult> {
        let code = VerificationCode::parse(raw)?;
        self.check(&code)
    }

    /// Apply the domain rule to a well-formed code
    pub fn check(&self, code: &VerificationCode) -> DomainResult<VerifyCodeResult> {
        if code.digit_at(self.config.rejected_position) == Some(self.config.rejected_digit) {
            tracing::debug!(
                position = self.config.rejected_position,
                "Verification code rejected by domain rule"
            );
            return Err(DomainError::VerificationFailed);
        }

        tracing::debug!("Verification code accepted");
        Ok(VerifyCodeResult {
            message: VERIFICATION_SUCCESS_MESSAGE.to_string(),
        })
    }
}
