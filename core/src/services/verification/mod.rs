//! Verification service module
//!
//! Applies the domain rule to codes that already passed shape checks:
//! a well-formed code is accepted unless a configured digit sits at a
//! configured position.

mod service;
mod types;


pub use service::{VerificationService, VERIFICATION_SUCCESS_MESSAGE};
pub use types::VerifyCodeResult;
