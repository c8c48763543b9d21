//! # OTP Verify Core
//!
//! Core verification logic and domain layer for the OTP verification service.
//! This crate contains the verification code entity, the verification and
//! rate limiting services, and the error types every other crate maps from.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
