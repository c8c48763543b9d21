//! Type definitions shared by the API and the code entry client
//!
//! - `response` - Success, health and envelope bodies

pub mod response;

pub use response::{HealthResponse, HealthStatus, ResponseEnvelope, ResponseStatus, VerifyResponse};
