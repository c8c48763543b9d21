use once_cell::sync::Lazy;
use ov_shared::errors::{error_codes, FieldError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

// ASCII digits only; `\d` would admit other Unicode digits
static NUMERIC_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("numeric code pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// 6-digit verification code; a missing field is treated as empty
    #[serde(default)]
    #[validate(
        length(equal = 6, message = "Code must be exactly 6 digits"),
        regex(path = *NUMERIC_CODE, message = "Code must contain only numbers")
    )]
    pub code: String,
}

impl VerifyCodeRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Flatten validator output into wire field errors, length before numeric
    pub fn field_errors(&self, errors: &ValidationErrors) -> Vec<FieldError> {
        let mut mapped: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                let field = field.to_string();
                failures.iter().map(move |failure| {
                    let code = match failure.code.as_ref() {
                        "regex" => error_codes::NUMERIC,
                        "length" => error_codes::LENGTH,
                        other => other,
                    };
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| code.to_string());
                    FieldError::new(field.clone(), code, message)
                })
            })
            .map(|error| error.with_value(self.code.clone()))
            .collect();

        mapped.sort_by_key(|error| match error.code.as_str() {
            error_codes::LENGTH => 0,
            error_codes::NUMERIC => 1,
            _ => 2,
        });
        mapped
    }
}
