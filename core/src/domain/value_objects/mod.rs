//! Value objects representing immutable domain concepts.

pub mod verification_result;

// Re-export commonly used types
pub use verification_result::{FailureKind, VerificationResult, GENERIC_FAILURE_MESSAGE};
