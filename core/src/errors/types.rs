//! Request validation errors

use ov_shared::errors::FieldError;
use thiserror::Error;

use crate::domain::entities::CodeViolation;

const FALLBACK_MESSAGE: &str = "Invalid request data";

/// One or more violated request constraints.
///
/// Displays as the message of the first violation, which is also the
/// top-level message of the 400 body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.message())]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn from_violations(value: &str, violations: &[CodeViolation]) -> Self {
        Self::new(
            violations
                .iter()
                .map(|violation| violation.to_field_error(value))
                .collect(),
        )
    }

    pub fn message(&self) -> &str {
        self.errors
            .first()
            .map(|error| error.message.as_str())
            .unwrap_or(FALLBACK_MESSAGE)
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_field_errors(self) -> Vec<FieldError> {
        self.errors
    }
}
