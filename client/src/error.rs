use thiserror::Error;

/// Failures building or driving the HTTP gateway.
///
/// These never escape [`crate::VerificationGateway::verify`]; they surface
/// only from gateway construction.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid gateway configuration: {0}")]
    Config(String),
}
