//! Shared utilities and common types for the OTP verification service
//!
//! This crate provides functionality used by every other crate in the workspace:
//! - Configuration types loaded from the environment
//! - Error response bodies returned by the HTTP API
//! - Success and health response bodies

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, Environment, LogFormat, LoggingConfig, RateLimitConfig, ServerConfig,
    VerificationConfig,
};
pub use errors::{
    error_codes, FieldError, NotFoundResponse, RateLimitResponse, StatusErrorResponse,
    ValidationErrorResponse,
};
pub use types::{HealthResponse, HealthStatus, ResponseEnvelope, ResponseStatus, VerifyResponse};
