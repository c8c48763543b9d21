//! Request bodies accepted by the API

pub mod verify;

pub use verify::VerifyCodeRequest;
