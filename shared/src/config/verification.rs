//! Domain rule configuration

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigSource};

/// Number of digits in a verification code
pub const CODE_LENGTH: usize = 6;

/// Which digit at which position makes a well-formed code fail verification
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Zero-based position inspected by the domain rule
    pub rejected_position: usize,

    /// Digit at `rejected_position` that fails verification
    pub rejected_digit: char,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            rejected_position: 5,
            rejected_digit: '7',
        }
    }
}

impl VerificationConfig {
    /// Load the rule; out of range positions and non-digit values fall back
    /// to the defaults like any other malformed value
    pub fn from_source(source: ConfigSource<'_>) -> Self {
        let defaults = Self::default();

        let position = parse_or(source, "VERIFY_REJECTED_POSITION", defaults.rejected_position);
        let digit = parse_or(source, "VERIFY_REJECTED_DIGIT", defaults.rejected_digit);

        Self {
            rejected_position: if position < CODE_LENGTH {
                position
            } else {
                defaults.rejected_position
            },
            rejected_digit: if digit.is_ascii_digit() {
                digit
            } else {
                defaults.rejected_digit
            },
        }
    }

    /// Check that the rule can match a code
    pub fn validate(&self) -> Result<(), String> {
        if self.rejected_position >= CODE_LENGTH {
            return Err(format!(
                "rejected position {} is outside a {}-digit code",
                self.rejected_position, CODE_LENGTH
            ));
        }
        if !self.rejected_digit.is_ascii_digit() {
            return Err(format!(
                "rejected value {:?} is not a digit",
                self.rejected_digit
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> VerificationConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        VerificationConfig::from_source(&|key| vars.get(key).cloned())
    }

    #[test]
    fn test_overrides_within_range() {
        let config = load(&[
            ("VERIFY_REJECTED_POSITION", "0"),
            ("VERIFY_REJECTED_DIGIT", "9"),
        ]);
        assert_eq!(config.rejected_position, 0);
        assert_eq!(config.rejected_digit, '9');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_position_falls_back() {
        let config = load(&[("VERIFY_REJECTED_POSITION", "6")]);
        assert_eq!(config, VerificationConfig::default());
    }

    #[test]
    fn test_non_digit_value_falls_back() {
        let config = load(&[("VERIFY_REJECTED_DIGIT", "x")]);
        assert_eq!(config, VerificationConfig::default());
    }

    #[test]
    fn test_validate_rejects_unmatchable_rules() {
        let position = VerificationConfig {
            rejected_position: CODE_LENGTH,
            rejected_digit: '7',
        };
        assert!(position.validate().is_err());

        let digit = VerificationConfig {
            rejected_position: 5,
            rejected_digit: 'x',
        };
        assert!(digit.validate().is_err());
    }
}
