//! # OTP Verify Client
//!
//! Headless code entry interface for the OTP verification service: a
//! six-slot input model, the form state machine driving it, and the gateway
//! that submits assembled codes to the verify endpoint.

pub mod code;
pub mod config;
pub mod error;
pub mod form;
pub mod gateway;
pub mod network;

pub use code::Code;
pub use config::ClientConfig;
pub use error::GatewayError;
pub use form::{
    Completion, Key, SubmitAttempt, SubmitOutcome, VerificationForm, VerificationListener,
    VerificationStatus, INCOMPLETE_CODE_MESSAGE,
};
pub use gateway::{classify, HttpVerificationGateway, VerificationGateway};
pub use network::NetworkStatus;

// Re-export the result type every gateway produces
pub use ov_core::domain::value_objects::{FailureKind, VerificationResult};
