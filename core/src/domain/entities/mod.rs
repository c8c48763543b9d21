//! Domain entities representing core business objects.

pub mod verification_code;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use verification_code::{
    CodeViolation, VerificationCode, CODE_FIELD, CODE_LENGTH, LENGTH_MESSAGE, NUMERIC_MESSAGE,
};
