//! Verification code entity: a candidate one-time code that passed shape checks.

use ov_shared::errors::{error_codes, FieldError};

use crate::errors::ValidationError;

pub use ov_shared::config::CODE_LENGTH;

/// Request field the code arrives in
pub const CODE_FIELD: &str = "code";

/// Message for a code of the wrong length
pub const LENGTH_MESSAGE: &str = "Code must be exactly 6 digits";

/// Message for a code containing anything but ASCII digits
pub const NUMERIC_MESSAGE: &str = "Code must contain only numbers";

/// Shape constraint a candidate code can violate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeViolation {
    /// Not exactly [`CODE_LENGTH`] characters
    Length,
    /// Empty, or contains a character that is not an ASCII digit
    NonNumeric,
}

impl CodeViolation {
    pub fn code(&self) -> &'static str {
        match self {
            CodeViolation::Length => error_codes::LENGTH,
            CodeViolation::NonNumeric => error_codes::NUMERIC,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CodeViolation::Length => LENGTH_MESSAGE,
            CodeViolation::NonNumeric => NUMERIC_MESSAGE,
        }
    }

    pub fn to_field_error(&self, value: &str) -> FieldError {
        FieldError::new(CODE_FIELD, self.code(), self.message()).with_value(value)
    }
}

/// A code of exactly [`CODE_LENGTH`] ASCII digits.
///
/// The only way to obtain one is [`VerificationCode::parse`], so the domain
/// rule never sees a malformed code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerificationCode {
    digits: String,
}

impl VerificationCode {
    /// Check the shape of `raw`, reporting every violated constraint
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let violations = Self::violations(raw);
        if violations.is_empty() {
            Ok(Self {
                digits: raw.to_string(),
            })
        } else {
            Err(ValidationError::from_violations(raw, &violations))
        }
    }

    /// Constraints `raw` violates, in reporting order
    pub fn violations(raw: &str) -> Vec<CodeViolation> {
        let mut violations = Vec::new();
        if raw.chars().count() != CODE_LENGTH {
            violations.push(CodeViolation::Length);
        }
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            violations.push(CodeViolation::NonNumeric);
        }
        violations
    }

    /// Digit at a zero-based position
    pub fn digit_at(&self, position: usize) -> Option<char> {
        self.digits.chars().nth(position)
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl std::fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

impl TryFrom<&str> for VerificationCode {
    type Error = ValidationError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}
